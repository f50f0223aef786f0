//! State-action value table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BOARD_SIZE, StateKey};

/// Action values for one state, indexed by cell
pub type ActionValues = [f64; BOARD_SIZE];

/// Q-table mapping packed board states to per-cell action values
///
/// Unseen states read as all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    values: HashMap<StateKey, ActionValues>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: StateKey, action: usize) -> f64 {
        self.values
            .get(&state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// All action values for a state, zeros if never visited
    pub fn values(&self, state: StateKey) -> ActionValues {
        self.values.get(&state).copied().unwrap_or_default()
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateKey, action: usize, value: f64) {
        debug_assert!(action < BOARD_SIZE);
        self.values.entry(state).or_default()[action] = value;
    }

    /// Highest-valued legal action; ties go to the earliest entry of `legal`
    pub fn greedy_action(&self, state: StateKey, legal: &[usize]) -> Option<usize> {
        let row = self.values(state);
        let mut best: Option<(usize, f64)> = None;
        for &action in legal {
            let value = row[action];
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }
        best.map(|(action, _)| action)
    }

    /// Move Q(s,a) toward `target` and return the new value
    ///
    /// Q(s,a) ← Q(s,a) + α[target - Q(s,a)]
    pub fn update(&mut self, state: StateKey, action: usize, target: f64) -> f64 {
        let old = self.get(state, action);
        let new = old + self.learning_rate * (target - old);
        self.set(state, action, new);
        new
    }

    /// Number of states with a stored row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of stored state-action values that are not zero
    pub fn nonzero_entries(&self) -> usize {
        self.values
            .values()
            .flat_map(|row| row.iter())
            .filter(|value| **value != 0.0)
            .count()
    }

    /// Reset all Q-values
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
