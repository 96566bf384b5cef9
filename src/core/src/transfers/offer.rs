use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOffer {
    pub cash: f64,
    pub add_ons: Vec<AddOnClause>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnClause {
    pub kind: AddOnKind,
    pub amount: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOnKind {
    Appearance,
    Performance,
    Promotion,
    SellOn,
}

impl AddOnKind {
    /// How likely the selling club thinks the clause is to pay out
    pub fn payout_probability(&self) -> f64 {
        match self {
            AddOnKind::Appearance => 0.7,
            AddOnKind::Performance => 0.5,
            AddOnKind::Promotion => 0.2,
            AddOnKind::SellOn => 0.3,
        }
    }
}

impl TransferOffer {
    pub fn new(cash: f64) -> Self {
        TransferOffer {
            cash,
            add_ons: Vec::new(),
        }
    }

    pub fn with_add_on(mut self, kind: AddOnKind, amount: f64) -> Self {
        self.add_ons.push(AddOnClause { kind, amount });
        self
    }

    /// Cash plus the add-ons discounted by payout odds and the seller's appetite for them.
    pub fn effective_value(&self, add_on_acceptance: f64) -> f64 {
        let add_ons: f64 = self
            .add_ons
            .iter()
            .map(|clause| clause.amount * clause.kind.payout_probability() * add_on_acceptance)
            .sum();

        self.cash + add_ons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_only_offer() {
        assert_eq!(TransferOffer::new(1_000_000.0).effective_value(0.4), 1_000_000.0);
    }

    #[test]
    fn test_add_ons_are_discounted() {
        let offer = TransferOffer::new(1_000_000.0)
            .with_add_on(AddOnKind::Appearance, 100_000.0)
            .with_add_on(AddOnKind::Promotion, 500_000.0);

        // 100k * 0.7 * 0.5 + 500k * 0.2 * 0.5
        assert!((offer.effective_value(0.5) - 1_085_000.0).abs() < 1e-6);
    }
}
