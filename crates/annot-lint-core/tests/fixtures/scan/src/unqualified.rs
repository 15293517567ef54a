pub fn retry(#[range(0, 5)] attempts: u8) -> u8 {
    attempts
}
