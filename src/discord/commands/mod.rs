mod lookup;

pub use lookup::region_lookup;
