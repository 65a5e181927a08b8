//! Numeric core of the descent workspace: the 2-component parameter vector of
//! `y = w0 + w1 * x`, the sum-of-squared-errors loss and gradient, the loss
//! surface used for contour plots, and the update rules in [`optim`].

pub mod error;
pub mod grad_check;
pub mod gradient;
pub mod loss_surface;
pub mod optim;
pub mod params;

pub use error::DescentError;
pub use gradient::{sse_gradient, sse_loss};
pub use loss_surface::LossSurface;
pub use params::Params;
