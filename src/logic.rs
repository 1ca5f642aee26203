use itertools::Itertools;
use varisat::Lit;

/// No two of `lits` are true; `(!A + !B) * (!A + !C) * ...`
pub(crate) fn at_most_one(lits: &[Lit]) -> Vec<Vec<Lit>> {
    lits.iter()
        .tuple_combinations()
        .map(|(a, b)| vec![!*a, !*b])
        .collect_vec()
}

pub(crate) fn exactly_one(lits: &[Lit]) -> Vec<Vec<Lit>> {
    let mut clauses = at_most_one(lits);
    // at least one is true; A + B + C + ...
    clauses.push(lits.to_vec());

    clauses
}

/// `premise` implies every one of `conclusions`; `(!P + A) * (!P + B) * ...`
pub(crate) fn implies_all(premise: Lit, conclusions: &[Lit]) -> Vec<Vec<Lit>> {
    conclusions.iter()
        .map(|conclusion| vec![!premise, *conclusion])
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use varisat::Var;

    use super::*;

    #[test]
    fn exactly_one_shape() {
        let lits = (0..4).map(|i| Var::from_index(i).positive()).collect_vec();
        let clauses = exactly_one(&lits);

        // 4 choose 2 exclusions plus one covering clause
        assert_eq!(clauses.len(), 7);
        assert_eq!(clauses.last().unwrap(), &lits);
        assert!(clauses[..6].iter().all(|clause| clause.len() == 2 && clause.iter().all(|lit| lit.is_negative())));
    }

    #[test]
    fn at_most_one_of_one_is_trivial() {
        assert!(at_most_one(&[Var::from_index(0).positive()]).is_empty());
    }
}
