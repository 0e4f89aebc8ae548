//! The multi-line invoice draft used by the entry form.
//!
//! Lines are ephemeral form state — they exist only while the draft is
//! open and are flattened into the insert payload on save. Each line has
//! its own amount and rate; the inclusive/exclusive mode is shared across
//! the whole draft. A manual BTW override on a line supersedes the
//! calculated value in all downstream totals, including an override of 0.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::btw::{btw_amount, round_cents};
use super::error::BoekError;
use super::types::{AmountMode, BtwRate};

/// Maximum number of lines per invoice draft.
pub const MAX_DRAFT_LINES: usize = 4;

/// One entry line of an in-progress invoice draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLine {
    pub amount: Decimal,
    pub rate: BtwRate,
    /// BTW computed from amount/rate/mode. Zero while the draft has no mode.
    pub btw_calculated: Decimal,
    /// Manual override; when set it wins over `btw_calculated` everywhere.
    pub btw_manual: Option<Decimal>,
}

impl DraftLine {
    /// The BTW that counts for this line: manual override if present,
    /// otherwise the calculated value.
    pub fn effective_btw(&self) -> Decimal {
        self.btw_manual.unwrap_or(self.btw_calculated)
    }
}

/// Totals across all draft lines, for display and for the insert payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTotals {
    /// Sum of all line amounts, regardless of override status.
    pub total_amount: Decimal,
    /// Sum of effective BTW (override where set, calculated elsewhere).
    pub total_btw: Decimal,
}

/// An in-progress invoice draft: a shared amount mode and up to
/// [`MAX_DRAFT_LINES`] lines with mixed rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDraft {
    mode: Option<AmountMode>,
    lines: Vec<DraftLine>,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<AmountMode> {
        self.mode
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Set or change the shared inclusive/exclusive mode.
    ///
    /// Every line's calculated BTW is recomputed from scratch; manual
    /// overrides persist across mode changes (existing form behavior,
    /// preserved deliberately).
    pub fn set_mode(&mut self, mode: AmountMode) {
        self.mode = Some(mode);
        for line in &mut self.lines {
            line.btw_calculated = btw_amount(line.amount, line.rate.fraction(), mode);
        }
    }

    /// Append a line. Fails once the draft already holds
    /// [`MAX_DRAFT_LINES`] lines.
    pub fn add_line(&mut self, amount: Decimal, rate: BtwRate) -> Result<usize, BoekError> {
        if self.lines.len() >= MAX_DRAFT_LINES {
            return Err(BoekError::Draft(format!(
                "draft cannot have more than {MAX_DRAFT_LINES} lines"
            )));
        }
        self.lines.push(DraftLine {
            amount,
            rate,
            btw_calculated: self.calculated_for(amount, rate),
            btw_manual: None,
        });
        Ok(self.lines.len() - 1)
    }

    /// Replace a line's amount and rate, recomputing its calculated BTW.
    /// The manual override, if any, stays in place until the user clears it.
    pub fn update_line(
        &mut self,
        index: usize,
        amount: Decimal,
        rate: BtwRate,
    ) -> Result<(), BoekError> {
        let calculated = self.calculated_for(amount, rate);
        let line = self.line_mut(index)?;
        line.amount = amount;
        line.rate = rate;
        line.btw_calculated = calculated;
        Ok(())
    }

    /// Set or clear the manual BTW override on a line. An override of 0 is
    /// a real override, not "unset".
    pub fn set_manual_btw(
        &mut self,
        index: usize,
        btw: Option<Decimal>,
    ) -> Result<(), BoekError> {
        self.line_mut(index)?.btw_manual = btw.map(round_cents);
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<DraftLine, BoekError> {
        if index >= self.lines.len() {
            return Err(BoekError::Draft(format!("no draft line at index {index}")));
        }
        Ok(self.lines.remove(index))
    }

    /// Current totals for display and for the eventual insert payload.
    pub fn totals(&self) -> DraftTotals {
        let total_amount = self.lines.iter().map(|l| l.amount).sum();
        let total_btw = self.lines.iter().map(|l| l.effective_btw()).sum();
        DraftTotals {
            total_amount,
            total_btw,
        }
    }

    fn calculated_for(&self, amount: Decimal, rate: BtwRate) -> Decimal {
        // No mode chosen yet → nothing to calculate
        match self.mode {
            Some(mode) => btw_amount(amount, rate.fraction(), mode),
            None => Decimal::ZERO,
        }
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut DraftLine, BoekError> {
        self.lines
            .get_mut(index)
            .ok_or_else(|| BoekError::Draft(format!("no draft line at index {index}")))
    }
}
