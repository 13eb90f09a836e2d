use crate::physics::session::PendulumSession;
use crate::prelude::*;

/// The pendulum session, owned by the app and advanced once per frame
#[derive(Resource, Deref, DerefMut, Debug, Default)]
pub struct Simulation(pub PendulumSession);

impl Simulation {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self(PendulumSession::from_config(config))
    }
}
