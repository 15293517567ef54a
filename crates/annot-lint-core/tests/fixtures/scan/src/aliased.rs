use validators::range as bounds;

pub struct Account {
    limit: u32,
}

impl Account {
    pub fn set_limit(&mut self, #[bounds(0, 10_000)] limit: u32) {
        self.limit = limit;
    }
}
