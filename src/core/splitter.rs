use std::collections::HashMap;

use log::{debug, info, warn};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DEFAULT_VAT_RATE_IDR, MAX_CLAMP_PASSES};
use crate::core::errors::SplitbillError;
use crate::core::models::{Bill, ClaimedItem, PersonAssignment, PersonSplit, SplitResult};

/// Explicit configuration for the splitter. Defaults live here instead of
/// ambient globals so the split stays a pure function of its arguments.
#[derive(Clone, Debug)]
pub struct SplitConfig {
    /// Fallback VAT rate per currency code, applied only when the bill
    /// does not state a VAT amount itself.
    pub default_vat_rates: HashMap<String, Decimal>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let mut default_vat_rates = HashMap::new();
        default_vat_rates.insert("IDR".to_string(), DEFAULT_VAT_RATE_IDR);
        Self { default_vat_rates }
    }
}

impl SplitConfig {
    pub fn vat_rate_for(&self, currency: &str) -> Decimal {
        self.default_vat_rates
            .get(&currency.to_uppercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Rounds to currency precision with standard (midpoint away from zero)
/// rounding.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

struct PersonDraft {
    person: String,
    items: Vec<ClaimedItem>,
    individual_total: Decimal,
    vat_share: Decimal,
    other_share: Decimal,
    discount_share: Decimal,
}

pub struct BillSplitter {
    config: SplitConfig,
}

impl BillSplitter {
    pub fn new(config: SplitConfig) -> Self {
        info!("Initializing BillSplitter");
        Self { config }
    }

    /// Splits a validated bill across the given assignments.
    ///
    /// Guarantees `sum(final_total) == total_bill` exactly after rounding:
    /// any residual cent left by per-share rounding is applied to the
    /// person with the largest individual total (first in input order on
    /// ties).
    pub fn split(
        &self,
        bill: &Bill,
        assignments: &[PersonAssignment],
    ) -> Result<SplitResult, SplitbillError> {
        info!(
            "Splitting {} bill with {} items among {} persons",
            bill.currency,
            bill.items.len(),
            assignments.len()
        );
        bill.validate_summary()?;

        let mut drafts = self.resolve_claims(bill, assignments)?;
        let subtotal: Decimal = drafts.iter().map(|d| d.individual_total).sum();

        let summary = bill.summary.as_ref();
        if let Some(stated) = summary.and_then(|s| s.subtotal) {
            if round2(stated) != round2(subtotal) {
                return Err(SplitbillError::InvalidSummary(format!(
                    "stated subtotal {} does not match claimed items total {}",
                    stated, subtotal
                )));
            }
        }

        let total_vat = match summary.and_then(|s| s.vat_amount) {
            Some(stated) => round2(stated),
            None => round2(subtotal * self.config.vat_rate_for(&bill.currency)),
        };
        let total_other = summary
            .and_then(|s| s.service_amount)
            .map(round2)
            .unwrap_or(Decimal::ZERO);
        let (total_discount, discount_proportional) = match summary.and_then(|s| s.discount_amount)
        {
            Some(pct) if summary.is_some_and(|s| s.discount_is_percentage) => {
                (round2(subtotal * pct / Decimal::from(100)), true)
            }
            Some(fixed) => (round2(fixed), false),
            None => (Decimal::ZERO, false),
        };
        debug!(
            "Pools: subtotal={} vat={} other={} discount={} (proportional={})",
            subtotal, total_vat, total_other, total_discount, discount_proportional
        );

        let pool = subtotal + total_vat + total_other;
        if total_discount > pool {
            return Err(SplitbillError::InvalidSummary(format!(
                "discount {} exceeds the bill total {}",
                total_discount, pool
            )));
        }

        let total_bill = round2(pool - total_discount);
        if let Some(stated) = summary.and_then(|s| s.total) {
            if round2(stated) != total_bill {
                return Err(SplitbillError::InvalidSummary(format!(
                    "stated total {} does not match {} computed from stated components",
                    stated, total_bill
                )));
            }
        }

        let head_count = Decimal::from(drafts.len());
        for draft in &mut drafts {
            draft.vat_share = if subtotal.is_zero() {
                round2(total_vat / head_count)
            } else {
                round2(total_vat * draft.individual_total / subtotal)
            };
            draft.other_share = round2(total_other / head_count);
            draft.discount_share = if discount_proportional && !subtotal.is_zero() {
                round2(total_discount * draft.individual_total / subtotal)
            } else {
                round2(total_discount / head_count)
            };
        }

        self.clamp_discounts(&mut drafts);

        let mut split_details: Vec<PersonSplit> = drafts
            .into_iter()
            .map(|d| {
                let final_total =
                    round2(d.individual_total + d.vat_share + d.other_share - d.discount_share);
                PersonSplit {
                    person: d.person,
                    items: d.items,
                    individual_total: round2(d.individual_total),
                    vat_share: d.vat_share,
                    other_share: d.other_share,
                    discount_share: d.discount_share,
                    final_total,
                }
            })
            .collect();

        let distributed: Decimal = split_details.iter().map(|p| p.final_total).sum();
        let residual = total_bill - distributed;
        if !residual.is_zero() {
            let idx = largest_share_index(&split_details);
            debug!(
                "Applying rounding residual {} to {}",
                residual, split_details[idx].person
            );
            split_details[idx].final_total += residual;
        }

        Ok(SplitResult {
            split_details,
            subtotal: round2(subtotal),
            total_bill,
            total_vat,
            total_other,
            total_discount,
            currency: bill.currency.clone(),
        })
    }

    /// Matches every claim against the bill by case-insensitive name and
    /// enforces that priced items are claimed exactly once per unit.
    fn resolve_claims(
        &self,
        bill: &Bill,
        assignments: &[PersonAssignment],
    ) -> Result<Vec<PersonDraft>, SplitbillError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, item) in bill.items.iter().enumerate() {
            if index.insert(item.name.trim().to_lowercase(), i).is_some() {
                warn!("Duplicate item name `{}`; later line shadows earlier", item.name);
            }
        }

        let mut claimed = vec![0u32; bill.items.len()];
        let mut drafts = Vec::with_capacity(assignments.len());
        let mut any_claim = false;

        for assignment in assignments {
            let mut items = Vec::with_capacity(assignment.claims.len());
            let mut individual_total = Decimal::ZERO;
            for claim in &assignment.claims {
                let key = claim.item.trim().to_lowercase();
                let Some(&i) = index.get(&key) else {
                    return Err(SplitbillError::UnresolvedItem(claim.item.clone()));
                };
                let item = &bill.items[i];
                claimed[i] += claim.quantity;
                if claimed[i] > item.quantity {
                    return Err(SplitbillError::Overclaim {
                        item: item.name.clone(),
                        claimed: claimed[i],
                        available: item.quantity,
                    });
                }
                if claim.quantity > 0 {
                    any_claim = true;
                }
                individual_total += item.unit_price * Decimal::from(claim.quantity);
                items.push(ClaimedItem {
                    item: item.name.clone(),
                    price: item.unit_price,
                    quantity: claim.quantity,
                });
            }
            drafts.push(PersonDraft {
                person: assignment.person.clone(),
                items,
                individual_total,
                vat_share: Decimal::ZERO,
                other_share: Decimal::ZERO,
                discount_share: Decimal::ZERO,
            });
        }

        if !any_claim {
            return Err(SplitbillError::EmptyAssignment);
        }

        // Zero-price items are tolerated unclaimed: they carry no cost to
        // distribute. Priced items must be fully claimed.
        for (i, item) in bill.items.iter().enumerate() {
            if item.unit_price > Decimal::ZERO && claimed[i] < item.quantity {
                return Err(SplitbillError::UnclaimedQuantity {
                    item: item.name.clone(),
                    unclaimed: item.quantity - claimed[i],
                });
            }
        }

        Ok(drafts)
    }

    /// Keeps every `final_total` non-negative: a person's discount share
    /// is capped at what they owe, and the excess is redistributed across
    /// persons that still have headroom, proportionally to that headroom.
    fn clamp_discounts(&self, drafts: &mut [PersonDraft]) {
        let mut capped = vec![false; drafts.len()];
        for _ in 0..MAX_CLAMP_PASSES {
            let mut excess = Decimal::ZERO;
            for (i, draft) in drafts.iter_mut().enumerate() {
                let cap = draft.individual_total + draft.vat_share + draft.other_share;
                if draft.discount_share > cap {
                    let over = draft.discount_share - cap;
                    warn!(
                        "Discount share for {} exceeds the {} they owe; redistributing {}",
                        draft.person, cap, over
                    );
                    excess += over;
                    draft.discount_share = cap;
                    capped[i] = true;
                }
            }
            if excess.is_zero() {
                return;
            }

            let headroom: Decimal = drafts
                .iter()
                .enumerate()
                .filter(|(i, _)| !capped[*i])
                .map(|(_, d)| d.individual_total + d.vat_share + d.other_share - d.discount_share)
                .sum();
            if headroom.is_zero() {
                // Discount equals the whole bill; nothing left to absorb
                // the rounding dust, final reconciliation handles it.
                return;
            }
            for (i, draft) in drafts.iter_mut().enumerate() {
                if capped[i] {
                    continue;
                }
                let room =
                    draft.individual_total + draft.vat_share + draft.other_share - draft.discount_share;
                draft.discount_share += round2(excess * room / headroom);
            }
        }
    }
}

/// Index of the person carrying the largest individual total; first in
/// input order wins ties.
fn largest_share_index(split_details: &[PersonSplit]) -> usize {
    let mut idx = 0;
    for (i, person) in split_details.iter().enumerate() {
        if person.individual_total > split_details[idx].individual_total {
            idx = i;
        }
    }
    idx
}
