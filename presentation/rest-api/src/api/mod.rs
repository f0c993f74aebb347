pub mod envelope;
pub mod error;
pub mod params;
pub mod payload;
pub mod root;
pub mod tags;
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
