pub mod instance_generator;
pub mod shortest_path;
