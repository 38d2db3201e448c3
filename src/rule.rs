use ca_rules::{ParseLife, ParseRuleError};
use std::str::FromStr;

/// A totalistic life-like rule, indexed by alive-neighbor count.
///
/// Conway's `B3/S23` is the default: birth on exactly 3 alive neighbors,
/// survival on 2 or 3.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rule {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl Rule {
    pub(crate) fn born(&self, alive_neighbors: u8) -> bool {
        self.birth[alive_neighbors as usize]
    }

    pub(crate) fn survives(&self, alive_neighbors: u8) -> bool {
        self.survival[alive_neighbors as usize]
    }
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        if b.contains(&0) {
            unimplemented!("B0 rules are not supported.")
        }
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        b.into_iter().for_each(|n| birth[n as usize] = true);
        s.into_iter().for_each(|n| survival[n as usize] = true);
        Rule { birth, survival }
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse_rule(s)
    }
}

impl Default for Rule {
    fn default() -> Self {
        "B3/S23".parse().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;

    #[test]
    fn test_default_rule() {
        let rule = Rule::default();
        for n in 0..=8 {
            assert_eq!(rule.born(n), n == 3);
            assert_eq!(rule.survives(n), n == 2 || n == 3);
        }
    }

    #[test]
    fn test_parse_rule() {
        let rule: Rule = "B36/S23".parse().unwrap();
        assert_eq!(rule.born(3), true);
        assert_eq!(rule.born(6), true);
        assert_eq!(rule.born(2), false);
        assert_eq!(rule.survives(2), true);
        assert_eq!(rule.survives(6), false);
        assert_eq!("B3/S23".parse::<Rule>().unwrap(), Rule::default());
    }

    #[test]
    fn test_parse_rule_rejects_garbage() {
        assert!("B3/S23/C4".parse::<Rule>().is_err());
        assert!("not a rule".parse::<Rule>().is_err());
    }
}
