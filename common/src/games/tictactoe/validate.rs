pub const MAX_NAME_LENGTH: usize = 12;

pub fn validate_player_name(name: &str) -> Result<(), String> {
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(format!(
            "Player name must be at most {} characters, got {}",
            MAX_NAME_LENGTH, length
        ));
    }
    if name.chars().any(char::is_control) {
        return Err("Player name must not contain control characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_names_up_to_limit() {
        assert!(validate_player_name("").is_ok());
        assert!(validate_player_name("Twelve chars").is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(validate_player_name("ÄÖÜäöüßÄÖÜäö").is_ok());
        assert!(validate_player_name("ÄÖÜäöüßÄÖÜäöü").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(validate_player_name("Bad\nname").is_err());
    }
}
