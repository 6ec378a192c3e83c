//! Fixed-step combat simulation over independent attacker/target pairs

use crate::attacker::Raynor;
use crate::config::{ConfigError, RaynorConstants, ScenarioConfig};
use crate::damage::DamageBreakdown;
use crate::enemy::Enemy;
use serde::{Deserialize, Serialize};
use tracing::info;

/// An attacker bound to its own target
///
/// Pairs never share state, so each one can be stepped in isolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatPair {
    pub name: String,
    pub attacker: Raynor,
    pub target: Enemy,
}

impl CombatPair {
    pub fn new(name: impl Into<String>, attacker: Raynor, target: Enemy) -> Self {
        CombatPair {
            name: name.into(),
            attacker,
            target,
        }
    }

    /// Decay target statuses by `elapsed`, then attack once
    pub fn tick(&mut self, elapsed: f64) -> DamageBreakdown {
        self.target.advance_time(elapsed);
        self.attacker.attack(&mut self.target)
    }
}

/// State of every pair at a checkpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-indexed iteration the snapshot was taken after
    pub iteration: u32,
    /// Simulated time elapsed
    pub elapsed: f64,
    pub pairs: Vec<CombatPair>,
}

/// Runs the driver script
#[derive(Debug, Clone)]
pub struct Simulation {
    pairs: Vec<CombatPair>,
    iterations: u32,
    snapshot_interval: u32,
    tick_length: f64,
    iteration: u32,
}

impl Simulation {
    /// Build a simulation, one attacker/target pair per entry in the scenario
    pub fn from_config(
        scenario: &ScenarioConfig,
        constants: RaynorConstants,
    ) -> Result<Self, ConfigError> {
        scenario.validate()?;
        constants.validate()?;

        let tick_length = constants.attack_speed;
        let pairs = scenario
            .pairs
            .iter()
            .map(|pair| {
                CombatPair::new(
                    pair.name.clone(),
                    Raynor::with_constants(pair.level, pair.talents.iter().copied(), constants.clone()),
                    Enemy::new(pair.enemy),
                )
            })
            .collect();

        Ok(Simulation {
            pairs,
            iterations: scenario.iterations,
            snapshot_interval: scenario.snapshot_interval,
            tick_length,
            iteration: 0,
        })
    }

    pub fn pairs(&self) -> &[CombatPair] {
        &self.pairs
    }

    /// Iterations completed so far
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn elapsed(&self) -> f64 {
        f64::from(self.iteration) * self.tick_length
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.iterations
    }

    /// Advance every pair by one tick
    pub fn step(&mut self) -> Vec<DamageBreakdown> {
        let tick_length = self.tick_length;
        let results = self
            .pairs
            .iter_mut()
            .map(|pair| pair.tick(tick_length))
            .collect();
        self.iteration += 1;
        results
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            iteration: self.iteration,
            elapsed: self.elapsed(),
            pairs: self.pairs.clone(),
        }
    }

    /// Run the remaining iterations, handing a snapshot to `on_snapshot` at each checkpoint
    pub fn run(&mut self, mut on_snapshot: impl FnMut(&Snapshot)) {
        info!(
            pairs = self.pairs.len(),
            iterations = self.iterations,
            "starting simulation"
        );

        while !self.is_finished() {
            self.step();
            if self.iteration % self.snapshot_interval == 0 {
                on_snapshot(&self.snapshot());
            }
        }

        for pair in &self.pairs {
            info!(
                pair = %pair.name,
                damage = pair.target.damage(),
                category = %pair.target.category(),
                "simulation finished"
            );
        }
    }
}
