use std::fmt::{Debug, Display};
use std::marker::PhantomData;

/// Kernel of the geometry library. The kernel determines the field type used for coordinates of
/// the points parameterized by it.
pub trait Kernel {
    /// Field number type.
    type FT: num_traits::Num + Copy + PartialOrd + Debug + Display;
}

/// Kernel that stores coordinates as plain values of `FT` without any filtering or exact
/// arithmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SimpleCartesian<FT = f64>(PhantomData<FT>);

impl<FT> Kernel for SimpleCartesian<FT>
where
    FT: num_traits::Num + Copy + PartialOrd + Debug + Display,
{
    type FT = FT;
}
