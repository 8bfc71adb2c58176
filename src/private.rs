/// A trait to seal private trait.
pub trait Sealed {}

macro_rules! impl_Sealed {
    ( $( $Type:ty ),* ) => {
        $( impl Sealed for $Type {} )*
    };
}

impl_Sealed!(u32, i32);
