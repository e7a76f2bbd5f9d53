//! Grouping of winning records by producer.
//!
//! The grouping is rebuilt from scratch on every call: a list of groups in
//! the order their producer was first seen, plus a lookup from producer key
//! to that group's position.

use data_loader::AwardRecord;
use std::collections::HashMap;

/// All wins of one producer key.
#[derive(Debug, Clone)]
pub struct ProducerGroup<'a> {
    pub producer: &'a str,
    pub wins: Vec<&'a AwardRecord>,
}

/// Winning records partitioned by raw producer string.
#[derive(Debug, Default)]
pub struct ProducerGroups<'a> {
    groups: Vec<ProducerGroup<'a>>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> ProducerGroups<'a> {
    /// Group the winners among `records`, ignoring non-winners.
    ///
    /// Producer keys compare by exact string equality, so "Joel Silver" and
    /// "Steven Perry and Joel Silver" are two different groups, and an empty
    /// producer string is a group like any other.
    pub fn group_winners(records: &'a [AwardRecord]) -> Self {
        let mut grouped = Self::default();
        for record in records.iter().filter(|r| r.winner) {
            grouped.push(record);
        }
        grouped
    }

    fn push(&mut self, record: &'a AwardRecord) {
        let key = record.producer.as_str();
        match self.positions.get(key) {
            Some(&position) => self.groups[position].wins.push(record),
            None => {
                self.positions.insert(key, self.groups.len());
                self.groups.push(ProducerGroup {
                    producer: key,
                    wins: vec![record],
                });
            }
        }
    }

    /// Number of distinct producers with at least one win
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[cfg(test)]
    fn get(&self, producer: &str) -> Option<&ProducerGroup<'a>> {
        self.positions
            .get(producer)
            .map(|&position| &self.groups[position])
    }

    /// Keep only producers with two or more wins, each sorted by year.
    ///
    /// The sort is stable: wins sharing a year stay in input order.
    /// Group order is unchanged.
    pub fn into_eligible(self) -> Vec<ProducerGroup<'a>> {
        let mut eligible: Vec<ProducerGroup<'a>> = self
            .groups
            .into_iter()
            .filter(|group| group.wins.len() >= 2)
            .collect();

        for group in &mut eligible {
            group.wins.sort_by_key(|record| record.year);
        }
        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_only_winners() {
        let records = vec![
            AwardRecord::winner("Producer A", 2000),
            AwardRecord::nominee("Producer A", 2001),
            AwardRecord::nominee("Producer B", 2002),
        ];

        let groups = ProducerGroups::group_winners(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("Producer A").unwrap().wins.len(), 1);
        assert!(groups.get("Producer B").is_none());
    }

    #[test]
    fn test_group_order_follows_first_appearance() {
        let records = vec![
            AwardRecord::winner("Zed", 2005),
            AwardRecord::winner("Alpha", 2001),
            AwardRecord::winner("Zed", 2006),
            AwardRecord::winner("Alpha", 2002),
        ];

        let eligible = ProducerGroups::group_winners(&records).into_eligible();
        let order: Vec<&str> = eligible.iter().map(|g| g.producer).collect();
        assert_eq!(order, vec!["Zed", "Alpha"]);
    }

    #[test]
    fn test_into_eligible_drops_single_wins_and_sorts() {
        let records = vec![
            AwardRecord::winner("Producer A", 2010),
            AwardRecord::winner("Producer B", 1999),
            AwardRecord::winner("Producer A", 1990),
            AwardRecord::winner("Producer A", 2000),
        ];

        let eligible = ProducerGroups::group_winners(&records).into_eligible();
        assert_eq!(eligible.len(), 1);

        let years: Vec<u16> = eligible[0].wins.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1990, 2000, 2010]);
    }

    #[test]
    fn test_same_year_wins_keep_input_order() {
        let mut first = AwardRecord::winner("Producer A", 2000);
        first.title = "First".to_string();
        let mut second = AwardRecord::winner("Producer A", 2000);
        second.title = "Second".to_string();
        let records = vec![AwardRecord::winner("Producer A", 2003), first, second];

        let eligible = ProducerGroups::group_winners(&records).into_eligible();
        let titles: Vec<&str> = eligible[0].wins.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", ""]);
    }

    #[test]
    fn test_empty_producer_is_a_valid_key() {
        let records = vec![AwardRecord::winner("", 2000), AwardRecord::winner("", 2004)];

        let eligible = ProducerGroups::group_winners(&records).into_eligible();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].producer, "");
    }
}
