pub mod rasterize_curve;
