use std::time::{Duration, Instant};

/// Wall-clock and game counters for the current session
pub struct SessionStats {
    start_time: Instant,
    elapsed: Duration,
    games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Refresh the elapsed clock; called from the render arm
    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self) {
        self.games_played += 1;
    }

    /// Elapsed time of the current game as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();

        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_games_played_counter() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.games_played(), 0);

        stats.on_game_over();
        stats.on_game_over();
        assert_eq!(stats.games_played(), 2);
    }

    #[test]
    fn test_game_start_resets_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();
        assert!(stats.elapsed.as_millis() >= 50);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed.as_millis() < 50);
    }
}
