// Service layer: event store, seed loading, settings and command dispatch

pub mod calendar;
pub mod event;
pub mod seed;
pub mod settings;
