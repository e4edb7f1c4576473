use std::time::Duration;

use instant::Instant;
use log::debug;

use crate::errors::SolveError;
use crate::matcher::find_candidates;
use crate::parser;
use crate::translation::Translation;
use crate::wordlist::WordList;

/// The unknown-word budget always goes at least this high...
pub const MIN_UNKNOWN_BUDGET: usize = 3;
/// ...or to one tenth of the token count, whichever is larger.
pub const UNKNOWN_BUDGET_DIVISOR: usize = 10;

/// Watches the search. Called on every recursive entry with the normalized
/// ciphertext rendered through the current translation (solved letters in
/// lowercase, unsolved ones still uppercase) and the number of words skipped
/// so far. It can't steer the search.
pub trait SearchObserver {
    fn visit(&mut self, partial: &str, unknowns: usize);
}

impl<F: FnMut(&str, usize)> SearchObserver for F {
    fn visit(&mut self, partial: &str, unknowns: usize) {
        self(partial, unknowns);
    }
}

/// Tuning knobs for one solver. `Default` puts no limit on time and uses the
/// standard budget ceiling.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Wall-clock limit for a whole `solve` call (all budgets together).
    pub time_limit: Option<Duration>,
    /// Overrides `max(MIN_UNKNOWN_BUDGET, tokens / UNKNOWN_BUDGET_DIVISOR)`.
    pub max_unknown_budget: Option<usize>,
}

/// The first translation found, at the smallest budget that produced one.
#[derive(Debug, Clone)]
pub struct Solution {
    pub translation: Translation,
    /// Tokens left unmatched on the accepted branch.
    pub unknown_count: usize,
    /// Unknown-word budget of the round that succeeded.
    pub budget: usize,
    /// Recursive calls made across every round, failed ones included.
    pub nodes: usize,
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,  // when the budget began
    limit: Duration, // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Highest unknown-word budget tried for `num_tokens` tokens.
#[must_use]
pub fn max_unknown_budget(num_tokens: usize) -> usize {
    MIN_UNKNOWN_BUDGET.max(num_tokens / UNKNOWN_BUDGET_DIVISOR)
}

/// State shared by every level of one depth-first search.
struct Search<'a, 'o> {
    word_list: &'a WordList,
    /// Normalized ciphertext, only used to render progress for the observer.
    normalized: &'a str,
    observer: Option<&'a mut (dyn SearchObserver + 'o)>,
    time_budget: Option<&'a TimeBudget>,
    budget: usize,
    nodes: usize,
}

impl Search<'_, '_> {
    /// Depth-first search over `rest` (tokens, longest first).
    ///
    /// Each branch gets its own copy of the translation, so nothing needs undoing
    /// on the way back up. Candidates are tried in rank order, then skipping the
    /// token; the first success wins.
    ///
    /// Returns the completed translation and how many tokens it skipped.
    fn search(
        &mut self,
        rest: &[String],
        translation: &Translation,
        unknowns: usize,
    ) -> Result<Option<(Translation, usize)>, SolveError> {
        self.nodes += 1;

        if let Some(tb) = self.time_budget
            && tb.expired()
        {
            return Err(SolveError::TimeBudgetExceeded { limit: tb.limit });
        }

        if let Some(observer) = self.observer.as_deref_mut() {
            observer.visit(&translation.apply(self.normalized), unknowns);
        }

        // Checked before the "done" test so a skip can never push an accepted
        // branch past its budget.
        if unknowns > self.budget {
            return Ok(None);
        }

        let Some((token, rest)) = rest.split_first() else {
            return Ok(Some((translation.clone(), unknowns)));
        };

        let partial = translation.apply(token);
        for candidate in find_candidates(self.word_list, &partial) {
            // Re-verifies the letters the matcher saw as decided and rejects a
            // plain letter already claimed by a different cipher letter.
            let Some(extended) = translation.extended_with(token, candidate) else {
                continue;
            };
            if let Some(found) = self.search(rest, &extended, unknowns)? {
                return Ok(Some(found));
            }
        }

        self.search(rest, translation, unknowns + 1)
    }
}

/// Cryptogram solver over one word list.
///
/// The word list is borrowed, never copied, so one load can back any number of
/// solvers and solves.
pub struct Solver<'w> {
    word_list: &'w WordList,
    options: SolveOptions,
}

impl<'w> Solver<'w> {
    pub fn new(word_list: &'w WordList) -> Self {
        Self::with_options(word_list, SolveOptions::default())
    }

    pub fn with_options(word_list: &'w WordList, options: SolveOptions) -> Self {
        Self { word_list, options }
    }

    pub fn word_list(&self) -> &'w WordList {
        self.word_list
    }

    /// Solve `ciphertext` by iterative deepening over the unknown-word budget.
    ///
    /// Returns `Ok(None)` if no budget up to the ceiling works.
    ///
    /// # Errors
    ///
    /// `SolveError::TimeBudgetExceeded` if a time limit is configured and runs out.
    pub fn solve(&self, ciphertext: &str) -> Result<Option<Solution>, SolveError> {
        self.run(ciphertext, None, None)
    }

    /// Like [`Solver::solve`], reporting every search step to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_with_observer(
        &self,
        ciphertext: &str,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Solution>, SolveError> {
        self.run(ciphertext, Some(observer), None)
    }

    /// A single round at exactly `budget`, no deepening.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_at_budget(&self, ciphertext: &str, budget: usize) -> Result<Option<Solution>, SolveError> {
        self.run(ciphertext, None, Some(budget))
    }

    fn run(
        &self,
        ciphertext: &str,
        mut observer: Option<&mut dyn SearchObserver>,
        only_budget: Option<usize>,
    ) -> Result<Option<Solution>, SolveError> {
        let normalized = parser::normalize(ciphertext);
        let mut tokens = parser::tokenize(&normalized);
        parser::order_by_length(&mut tokens);

        let ceiling = self
            .options
            .max_unknown_budget
            .unwrap_or_else(|| max_unknown_budget(tokens.len()));
        let budgets = match only_budget {
            Some(b) => b..=b,
            None => 0..=ceiling,
        };
        let time_budget = self.options.time_limit.map(TimeBudget::new);

        let mut nodes = 0;
        for budget in budgets {
            let mut search = Search {
                word_list: self.word_list,
                normalized: &normalized,
                observer: observer.as_deref_mut(),
                time_budget: time_budget.as_ref(),
                budget,
                nodes: 0,
            };
            let found = search.search(&tokens, &Translation::default(), 0)?;
            nodes += search.nodes;
            debug!("budget {budget}/{ceiling}: {} nodes, solved = {}", search.nodes, found.is_some());

            if let Some((translation, unknown_count)) = found {
                debug!(
                    "accepted translation with {} letters, {unknown_count} unknown words",
                    translation.len()
                );
                return Ok(Some(Solution { translation, unknown_count, budget, nodes }));
            }
        }

        Ok(None)
    }
}

/// Read in a ciphertext and solve it against `word_list` with default options.
///
/// # Errors
///
/// Never fails without a time limit; the `Result` mirrors [`Solver::solve`].
pub fn solve(ciphertext: &str, word_list: &WordList) -> Result<Option<Solution>, SolveError> {
    Solver::new(word_list).solve(ciphertext)
}
