pub fn helper(input: &str) -> usize {
    input.len()
}
