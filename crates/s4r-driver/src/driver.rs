//! The `Driver`: per-step bulk-synchronous coordination of independent
//! workers (§4.5).
//!
//! State machine per worker (§4.5): `Initialized → (Stepping ↔
//! FoldingTotal) → [Constructing] → Stepping …`, terminal `Done` after
//! `max_simulation_steps`. This isn't reified as an enum here — the phases
//! map directly onto [`Driver::run_step`]'s four sequential blocks (step,
//! reduce, fold, optionally construct), and a worker's only observable state
//! is its owned [`Simulation`], which already enforces within-step atomicity
//! (§5: "`traffic_load` is fully reset and rebuilt before it is observable
//! externally").

use rayon::prelude::*;

use s4r_core::{CoreError, NodeId, SimRng};
use s4r_network::StreetNetwork;
use s4r_persistence::{encode_array, encode_network, network_key, traffic_load_key, PersistenceSink};
use s4r_sim::Simulation;
use s4r_trips::generate_trips;

use crate::config::SimulationConfig;
use crate::error::DriverResult;

/// Orchestrates `config.workers` independent [`Simulation`]s sharing the
/// same initial network but never sharing state after construction (§5).
pub struct Driver {
    config: SimulationConfig,
    workers: Vec<Simulation>,
    step: u64,
}

impl Driver {
    /// Build one worker per `config.workers`, each seeded
    /// `config.random_seed + 37 * w` (§4.5/§6), holding its own clone of
    /// `base_network` and a trip table of `number_of_residents / workers`
    /// trips sampled from `origins`/`goals`.
    ///
    /// Fails with [`crate::DriverError::InvalidConfiguration`] if
    /// `config.workers == 0` or `steps_between_street_construction == 0`,
    /// with [`crate::DriverError::Trips`] if `origins` or `goals` is empty,
    /// and with [`crate::DriverError::Core`] if any candidate node isn't
    /// actually present in `base_network`.
    pub fn new(
        config: SimulationConfig,
        base_network: &StreetNetwork,
        origins: &[NodeId],
        goals: &[NodeId],
    ) -> DriverResult<Self> {
        config.validate()?;
        for &id in origins.iter().chain(goals.iter()) {
            if !base_network.has_node(id) {
                return Err(CoreError::NodeNotFound(id).into());
            }
        }

        let trips_per_worker = config.number_of_residents / config.workers;
        let mut workers = Vec::with_capacity(config.workers);

        for w in 0..config.workers {
            // Same RNG stream feeds both trip sampling and the jam-tolerance
            // draw, in that order — trips first, then one more sample.
            let mut rng = SimRng::for_worker(config.random_seed, w);
            let trips = generate_trips(trips_per_worker, origins, goals, &mut rng)?;
            let jam_tolerance = rng.gen_unit();

            let sim = Simulation::new(base_network.clone(), trips, jam_tolerance)
                .with_speed_model(config.speed_model)
                .with_constants(config.speed_constants)
                .with_trip_volume(config.trip_volume);

            tracing::debug!(worker = w, jam_tolerance, "worker initialized");
            workers.push(sim);
        }

        Ok(Self { config, workers, step: 0 })
    }

    pub fn step_counter(&self) -> u64 {
        self.step
    }

    /// Each worker's current `StreetNetwork`, for lockstep-invariant checks
    /// (§8: "All workers' `StreetNetwork.max_speed[*]` are identical at
    /// every step boundary").
    pub fn networks(&self) -> impl Iterator<Item = &StreetNetwork> {
        self.workers.iter().map(Simulation::network)
    }

    pub fn workers(&self) -> &[Simulation] {
        &self.workers
    }

    /// Run `config.max_simulation_steps` steps, persisting through `sink`
    /// if `config.persist_traffic_load` is set.
    pub fn run(&mut self, mut sink: Option<&mut dyn PersistenceSink>) -> DriverResult<()> {
        while self.step < self.config.max_simulation_steps {
            self.run_step(sink.as_deref_mut())?;
        }
        Ok(())
    }

    /// Run exactly one step of the per-step protocol (§4.5, data-flow
    /// diagram in §2):
    ///
    /// 1. every worker runs `step()` independently (parallel via rayon);
    /// 2. the driver computes the elementwise sum of every worker's
    ///    `traffic_load`;
    /// 3. the driver folds that total back into every worker;
    /// 4. on the configured period, every worker runs `road_construction()`
    ///    — deterministic given identical `cumulative_traffic_load`, so
    ///    workers stay in lockstep without further communication;
    /// 5. if persistence is enabled, worker 0's network and the total load
    ///    are persisted under this step's snapshot keys.
    pub fn run_step(&mut self, sink: Option<&mut dyn PersistenceSink>) -> DriverResult<()> {
        tracing::debug!(step = self.step, workers = self.workers.len(), "step start");

        self.workers.par_iter_mut().try_for_each(Simulation::step)?;

        let total = self.reduce_traffic_load();

        for worker in &mut self.workers {
            worker.fold_total(&total);
        }

        self.step += 1;

        if self.step % self.config.steps_between_street_construction == 0 {
            tracing::info!(step = self.step, "road construction");
            self.workers
                .par_iter_mut()
                .try_for_each(Simulation::road_construction)?;
        }

        if self.config.persist_traffic_load {
            if let Some(sink) = sink {
                self.persist_step(sink, &total);
            }
        }

        Ok(())
    }

    /// Elementwise sum of every worker's `traffic_load`, a plain sequential
    /// fold over the collected arrays — simpler than a tree reduction and
    /// fast enough at street-count scale (per-street u32 arrays, not
    /// per-agent).
    fn reduce_traffic_load(&self) -> Vec<u32> {
        let street_count = self.workers[0].traffic_load().len();
        let mut total = vec![0u32; street_count];
        for worker in &self.workers {
            for (t, l) in total.iter_mut().zip(worker.traffic_load()) {
                *t += l;
            }
        }
        total
    }

    /// Worker 0 persists `street_network_<step>` and `traffic_load_<step>`.
    /// Snapshot I/O failures are reported via `tracing::warn!` and do not
    /// abort the run (§7: recoverable at the driver's discretion).
    fn persist_step(&self, sink: &mut dyn PersistenceSink, total: &[u32]) {
        let worker0 = &self.workers[0];

        match encode_network(worker0.network()) {
            Ok(bytes) => {
                if let Err(e) = sink.write(&network_key(self.step), &bytes) {
                    tracing::warn!(step = self.step, error = %e, "failed to write network snapshot");
                }
            }
            Err(e) => tracing::warn!(step = self.step, error = %e, "failed to encode network snapshot"),
        }

        match encode_array(total) {
            Ok(bytes) => {
                if let Err(e) = sink.write(&traffic_load_key(self.step), &bytes) {
                    tracing::warn!(step = self.step, error = %e, "failed to write traffic load snapshot");
                }
            }
            Err(e) => tracing::warn!(step = self.step, error = %e, "failed to encode traffic load snapshot"),
        }
    }
}
