mod extend_connection;
mod tangent_arc;

pub use extend_connection::ExtendConnection;
pub use tangent_arc::TangentArc;
