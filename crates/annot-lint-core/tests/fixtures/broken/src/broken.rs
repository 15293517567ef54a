pub fn incomplete(
