pub mod extract_route;
