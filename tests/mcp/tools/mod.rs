mod library;
mod queue;
mod resources;
mod system;
