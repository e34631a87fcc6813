//! The batch panel: in-memory transaction queue and its operations.
//!
//! The panel owns every piece of session state: the queue, the gasless
//! toggle, the processing/progress pair the executor drives, and the add
//! form draft. All of it is volatile; a restart resets the session to the
//! three seed transactions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Config;
use crate::models::{
    seed_records, DraftField, DraftTransaction, TransactionRecord, GAS_ESTIMATE_MAX,
    GAS_ESTIMATE_MIN,
};

pub struct BatchPanel {
    records: Vec<TransactionRecord>,
    pub gasless: bool,
    pub processing: bool,
    pub progress: u8,
    pub draft: DraftTransaction,
    pub show_add_form: bool,
    rng: StdRng,
}

impl BatchPanel {
    pub fn new() -> Self {
        BatchPanel::with_rng(StdRng::from_entropy())
    }

    /// Build a panel with a caller-supplied RNG so gas estimates are
    /// deterministic under test.
    pub fn with_rng(rng: StdRng) -> Self {
        BatchPanel {
            records: seed_records(),
            gasless: true,
            processing: false,
            progress: 0,
            draft: DraftTransaction::default(),
            show_add_form: false,
            rng,
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn selected(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().filter(|tx| tx.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Sum of gas estimates over the selected subset.
    pub fn total_gas(&self) -> u64 {
        self.selected().map(|tx| tx.gas_estimate).sum()
    }

    /// Cost shown in the stats header. Zero while gasless mode is on,
    /// otherwise a fixed linear formula over the total gas (there is no
    /// price oracle anywhere in this demo).
    pub fn displayed_cost_usd(&self, config: &Config) -> f64 {
        if self.gasless {
            return 0.0;
        }
        (self.total_gas() as f64 * config.gas_price_gwei / 1e9) * config.eth_price_usd
    }

    /// Flip the `selected` flag of the matching record.
    /// Returns the new flag value, or None when no record matches.
    pub fn toggle_selection(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|tx| tx.id == id)?;
        record.selected = !record.selected;
        Some(record.selected)
    }

    /// Delete the matching record. Returns the removed record, or None when
    /// no record matches. There is no undo.
    pub fn remove(&mut self, id: &str) -> Option<TransactionRecord> {
        let pos = self.records.iter().position(|tx| tx.id == id)?;
        Some(self.records.remove(pos))
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Kind => self.draft.kind = value.to_string(),
            DraftField::To => self.draft.to = value.to_string(),
            DraftField::Amount => self.draft.amount = value.to_string(),
        }
    }

    /// Submit the add form. With all three fields filled this appends a new
    /// selected record with a random gas estimate, clears the draft and
    /// hides the form. An incomplete draft is dropped silently; the only
    /// trace is a debug log line.
    pub fn submit_draft(&mut self) -> Option<&TransactionRecord> {
        if !self.draft.is_complete() {
            debug!("Rejected incomplete draft: {:?}", self.draft);
            return None;
        }

        let gas_estimate = self.rng.gen_range(GAS_ESTIMATE_MIN..GAS_ESTIMATE_MAX);
        let record = TransactionRecord::new(
            &self.draft.kind,
            &self.draft.to,
            &self.draft.amount,
            gas_estimate,
        );

        self.records.push(record);
        self.draft.clear();
        self.show_add_form = false;
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_panel() -> BatchPanel {
        BatchPanel::with_rng(StdRng::seed_from_u64(42))
    }

    fn fill_draft(panel: &mut BatchPanel) {
        panel.set_draft_field(DraftField::Kind, "Stake");
        panel.set_draft_field(DraftField::To, "0x000000000000000000000000000000000000dEaD");
        panel.set_draft_field(DraftField::Amount, "32");
    }

    #[test]
    fn test_seed_state_totals() {
        let panel = test_panel();
        assert_eq!(panel.records().len(), 3);
        assert_eq!(panel.selected_count(), 2);
        assert_eq!(panel.total_gas(), 171_000);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut panel = test_panel();
        let id = panel.records()[2].id.clone();
        let before: Vec<String> = panel.selected().map(|tx| tx.id.clone()).collect();

        assert_eq!(panel.toggle_selection(&id), Some(true));
        assert_eq!(panel.selected_count(), 3);
        assert_eq!(panel.toggle_selection(&id), Some(false));

        let after: Vec<String> = panel.selected().map(|tx| tx.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut panel = test_panel();
        assert_eq!(panel.toggle_selection("no-such-id"), None);
        assert_eq!(panel.selected_count(), 2);
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let mut panel = test_panel();
        let id = panel.records()[0].id.clone();

        let removed = panel.remove(&id).expect("record should exist");
        assert_eq!(removed.kind, "Transfer");
        assert_eq!(panel.records().len(), 2);
        assert!(panel.records().iter().all(|tx| tx.id != id));

        // Removing again is a no-op
        assert!(panel.remove(&id).is_none());
        assert_eq!(panel.records().len(), 2);
    }

    #[test]
    fn test_submit_complete_draft_appends_selected_record() {
        let mut panel = test_panel();
        panel.show_add_form = true;
        fill_draft(&mut panel);

        let record = panel.submit_draft().expect("draft was complete").clone();
        assert!(record.selected);
        assert!(record.gas_estimate >= GAS_ESTIMATE_MIN);
        assert!(record.gas_estimate < GAS_ESTIMATE_MAX);

        assert_eq!(panel.records().len(), 4);
        assert!(!panel.show_add_form);
        assert!(!panel.draft.is_complete());
        assert!(panel.draft.kind.is_empty());
    }

    #[test]
    fn test_submit_incomplete_draft_is_silent() {
        let mut panel = test_panel();
        panel.set_draft_field(DraftField::Kind, "Transfer");
        panel.set_draft_field(DraftField::Amount, "1");

        assert!(panel.submit_draft().is_none());
        assert_eq!(panel.records().len(), 3);
        // The half-filled draft survives for another edit
        assert_eq!(panel.draft.kind, "Transfer");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut panel = test_panel();
        fill_draft(&mut panel);
        panel.submit_draft();

        let kinds: Vec<&str> = panel.records().iter().map(|tx| tx.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Transfer", "Swap", "Approve", "Stake"]);
    }

    #[test]
    fn test_displayed_cost() {
        let mut panel = test_panel();
        let config = Config::default();

        // Gasless mode always shows zero
        assert_eq!(panel.displayed_cost_usd(&config), 0.0);
        assert_eq!(
            crate::utils::format::usd(panel.displayed_cost_usd(&config)),
            "$0.00"
        );

        panel.gasless = false;
        // (171000 * 20 / 1e9) * 2000
        let cost = panel.displayed_cost_usd(&config);
        assert!((cost - 6.84).abs() < 1e-9);
        assert_eq!(crate::utils::format::usd(cost), "$6.84");
    }

    #[test]
    fn test_deterministic_gas_with_seeded_rng() {
        let mut a = BatchPanel::with_rng(StdRng::seed_from_u64(7));
        let mut b = BatchPanel::with_rng(StdRng::seed_from_u64(7));
        fill_draft(&mut a);
        fill_draft(&mut b);

        let gas_a = a.submit_draft().unwrap().gas_estimate;
        let gas_b = b.submit_draft().unwrap().gas_estimate;
        assert_eq!(gas_a, gas_b);
    }
}
