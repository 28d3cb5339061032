#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    One,
    Two,
}

impl Token {
    /// Get the other seat's token
    pub fn other(self) -> Token {
        match self {
            Token::One => Token::Two,
            Token::Two => Token::One,
        }
    }
}

/// A player's identity: display name plus the token mark for their seat.
/// Immutable after construction; tokens are fixed at the two seats and never
/// renegotiated mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: String, token: Token) -> Self {
        Player { name, token }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_token() {
        assert_eq!(Token::One.other(), Token::Two);
        assert_eq!(Token::Two.other(), Token::One);
    }

    #[test]
    fn test_player_identity() {
        let player = Player::new("Alice".to_string(), Token::One);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.token(), Token::One);
    }
}
