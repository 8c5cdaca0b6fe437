use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DEFAULT_DOMAIN: &str = "mailly.christmas";
pub const DEFAULT_LOCAL_PART_LEN: usize = 6;
pub const MAX_LOCAL_PART_LEN: usize = 32;

/// Produces random `<local>@<domain>` addresses with a base-36 local part.
#[derive(Debug, Clone)]
pub struct AddressGenerator {
    rng: StdRng,
    domain: String,
    local_part_len: usize,
}

impl AddressGenerator {
    pub fn new(domain: impl Into<String>, local_part_len: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            domain: domain.into(),
            local_part_len: local_part_len.clamp(1, MAX_LOCAL_PART_LEN),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn next_local_part(&mut self) -> String {
        (0..self.local_part_len)
            .map(|_| {
                let d = self.rng.random_range(0..36u32);
                std::char::from_digit(d, 36).unwrap_or('x')
            })
            .collect()
    }

    pub fn next_address(&mut self) -> String {
        let local = self.next_local_part();
        format!("{local}@{}", self.domain)
    }
}

impl Default for AddressGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN, DEFAULT_LOCAL_PART_LEN, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_has_configured_shape() {
        let mut g = AddressGenerator::new("mailly.christmas", 6, Some(1));
        let addr = g.next_address();
        let (local, domain) = addr.split_once('@').unwrap();
        assert_eq!(domain, "mailly.christmas");
        assert_eq!(local.len(), 6);
        assert!(
            local
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_same_seed_same_addresses() {
        let mut a = AddressGenerator::new("x.test", 8, Some(42));
        let mut b = AddressGenerator::new("x.test", 8, Some(42));
        for _ in 0..5 {
            assert_eq!(a.next_address(), b.next_address());
        }
    }

    #[test]
    fn test_local_part_len_is_clamped() {
        let mut zero = AddressGenerator::new("d", 0, Some(3));
        assert_eq!(zero.next_address().len(), "a@d".len());

        let mut huge = AddressGenerator::new("d", 500, Some(3));
        let addr = huge.next_address();
        assert_eq!(addr.split_once('@').unwrap().0.len(), MAX_LOCAL_PART_LEN);
    }
}
