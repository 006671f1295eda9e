use std::collections::HashSet;

use tracing::debug;

use crate::catalog;
use crate::parse::{ParsedClause, ParsedRuleSet};
use crate::{ImportError, RuleSetEngine};

/// Load parsed clauses into a fresh engine, rejecting anything the engine's
/// own operations would never produce.
pub(crate) fn build(parsed: ParsedRuleSet) -> Result<RuleSetEngine, ImportError> {
    check_operators(&parsed.clauses)?;
    check_duplicates(&parsed.clauses)?;
    check_exclusive_pairs(&parsed.clauses)?;

    let mut engine = RuleSetEngine::new();
    for clause in parsed.clauses {
        engine.insert_clause(clause.rule_type, clause.operator, clause.values);
    }
    debug!(rules = engine.len(), "imported rule set");
    Ok(engine)
}

fn check_operators(clauses: &[ParsedClause]) -> Result<(), ImportError> {
    for clause in clauses {
        if !catalog::is_legal(clause.rule_type, clause.operator) {
            return Err(ImportError::IllegalOperator {
                rule_type: clause.rule_type,
                operator: clause.operator,
            });
        }
    }
    Ok(())
}

fn check_duplicates(clauses: &[ParsedClause]) -> Result<(), ImportError> {
    let mut seen = HashSet::new();
    for clause in clauses {
        if !seen.insert(clause.rule_type) {
            return Err(ImportError::DuplicateRuleType {
                rule_type: clause.rule_type,
            });
        }
    }
    Ok(())
}

fn check_exclusive_pairs(clauses: &[ParsedClause]) -> Result<(), ImportError> {
    for clause in clauses {
        let Some(partner_type) = catalog::mutually_exclusive_partner(clause.rule_type) else {
            continue;
        };
        // each pair is reported once, from its higher-priority side
        if catalog::priority_of(clause.rule_type) > catalog::priority_of(partner_type) {
            continue;
        }
        let partner = clauses.iter().find(|c| c.rule_type == partner_type);
        if let Some(partner) = partner {
            if partner.operator.sense() == clause.operator.sense() {
                return Err(ImportError::SameSenseExclusivePair {
                    first: clause.rule_type,
                    second: partner_type,
                    operator: clause.operator,
                });
            }
        }
    }
    Ok(())
}
