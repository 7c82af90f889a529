pub mod rest;
pub mod routes;

use gridprompt_common::Config;
use gridprompt_filters::FilterGenerator;

pub use routes::build_router;

pub struct AppState {
    pub config: Config,
    pub generator: FilterGenerator,
}
