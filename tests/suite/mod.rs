mod config_options;
mod wizard_flow;
