use std::sync::Arc;

use culinai_core::application::CulinaiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CulinaiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CulinaiService) -> Self {
        Self { args, service }
    }
}
