mod grid_properties;
mod store_properties;
