use std::time::Duration;

pub const PRIZE_ENDPOINT: &str = "/prize.json";
pub const PRIZE_API_ENDPOINT: &str = "/api/prize";

pub const DEFAULT_SEGMENT_COUNT: u32 = 12;
pub const DEFAULT_WINNING_SEGMENTS: [u32; 4] = [0, 3, 6, 9];
pub const TOTAL_ATTEMPTS: u32 = 2;
pub const FULL_ROTATIONS: u32 = 3;

pub const PRE_SPIN_DELAY: Duration = Duration::from_millis(1000);
pub const SPIN_DURATION: Duration = Duration::from_millis(4000);
pub const PRIZE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEPLETION_NOTICE_HOLD: Duration = Duration::from_millis(2000);

pub const FILL_ALL_FIELDS_ERROR: &str = "Please fill all fields.";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email address.";
pub const INVALID_CHARACTERS_ERROR: &str = "Name and surname may only contain letters and spaces.";
pub const NO_ATTEMPTS_LEFT: &str = "No more attempts. Thank you for playing!";
pub const PRIZE_FETCH_ERROR: &str = "You won! But could not retrieve prize info.";
pub const TRY_NEXT_TIME: &str = "Try next time!";

pub fn welcome_message(name: &str) -> String {
    format!("Hello, {}! Welcome.", name)
}

pub fn winning_prize_message(prize: &str) -> String {
    format!("Congratulations! You won: {}", prize)
}
