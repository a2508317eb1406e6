mod spike_generator;

pub use spike_generator::SpikeGenerator;
