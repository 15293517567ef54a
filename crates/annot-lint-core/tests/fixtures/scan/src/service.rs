use validators::range;

pub fn transfer(amount: u64, #[range(1, 100)] priority: u8) -> u64 {
    amount + u64::from(priority)
}

pub fn close() {}
