// Typed rule set for monomorphized scoring.
//
// This module provides the `RuleSet` trait, implemented for tuples of
// `MatchRule`s so that a matcher's rules are evaluated without virtual
// dispatch, in tuple order.

use planmatch_core::PlanSummary;

use super::analysis::RuleMatch;
use crate::rule::{MatchRule, RuleContext};

// A set of rules that can be evaluated together.
//
// Implemented for `()` and tuples of up to eight `MatchRule`s.
pub trait RuleSet: Send + Sync {
    // Returns the number of rules in this set.
    fn rule_count(&self) -> usize;

    // Evaluates each rule individually, in order, keeping reasons.
    fn evaluate_each(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> Vec<RuleMatch>;
}

// ============================================================================
// Tuple implementations
// ============================================================================

// Implement `RuleSet` for an empty tuple (no rules).
impl RuleSet for () {
    #[inline]
    fn rule_count(&self) -> usize {
        0
    }

    #[inline]
    fn evaluate_each(&self, _plan: &PlanSummary, _ctx: &RuleContext<'_>) -> Vec<RuleMatch> {
        Vec::new()
    }
}

macro_rules! impl_rule_set_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> RuleSet for ($($T,)+)
        where
            $($T: MatchRule,)+
        {
            #[inline]
            fn rule_count(&self) -> usize {
                let mut count = 0;
                $(let _ = &self.$idx; count += 1;)+
                count
            }

            fn evaluate_each(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> Vec<RuleMatch> {
                vec![$({
                    let outcome = self.$idx.evaluate(plan, ctx);
                    RuleMatch::new(self.$idx.rule_ref(), outcome.impact, outcome.reason)
                }),+]
            }
        }
    };
}

impl_rule_set_for_tuple!(0: R0);
impl_rule_set_for_tuple!(0: R0, 1: R1);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2, 3: R3);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2, 3: R3, 4: R4);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2, 3: R3, 4: R4, 5: R5);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2, 3: R3, 4: R4, 5: R5, 6: R6);
impl_rule_set_for_tuple!(0: R0, 1: R1, 2: R2, 3: R3, 4: R4, 5: R5, 6: R6, 7: R7);
