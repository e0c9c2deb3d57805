//! `mathcore::colors` submodule implements RGBA color with either 8-bit or floating point channels.
//!
//! 8-bit colors store straight (not premultiplied) alpha, while floating point colors are
//! produced from them with premultiplied alpha:
//! ```rust
//! # use gm3d::mathcore::colors::Color;
//! let color: Color<f32> = Color::from(Color::<u8>::new(255, 0, 0, 51));
//! assert_eq!(color, Color::new(0.2, 0.0, 0.0, 0.2));
//! ```
//! There is no conversion back into 8-bit channels.
//!

use crate::mathcore::scalars::Scalar;

/// [`Channel`] trait represents scalar that can be used as a color channel.
///
/// It is implemented for `u8`, `f32` and `f64`.
///
pub trait Channel: Scalar {
    /// Value of fully opaque alpha channel.
    ///
    const OPAQUE: Self;
}
impl Channel for u8 {
    const OPAQUE: Self = u8::MAX;
}
impl Channel for f32 {
    const OPAQUE: Self = 1.0;
}
impl Channel for f64 {
    const OPAQUE: Self = 1.0;
}

/// [`Color`] struct represents RGBA model of color.
///
/// # Examples
/// ```rust
/// # use gm3d::mathcore::colors::Color;
/// let color: Color<u8> = Color::rgb(1, 2, 3);
/// assert_eq!(color, Color { r: 1, g: 2, b: 3, a: 255 });
/// assert_eq!(Color::<f32>::rgb(0.5, 0.5, 0.5), Color::gray_alpha(0.5, 1.0));
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Color<S> {
    /// Red component of color.
    ///
    pub r: S,

    /// Green component of color.
    ///
    pub g: S,

    /// Blue component of color.
    ///
    pub b: S,

    /// Alpha channel value of color.
    ///
    pub a: S,
}
impl<S: Channel> Color<S> {
    /// Initializes `Color` from RGBA model.
    ///
    pub const fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }
    /// Initializes opaque `Color` from RGB model.
    ///
    pub const fn rgb(r: S, g: S, b: S) -> Self {
        Color { r, g, b, a: S::OPAQUE }
    }
    /// Initializes `Color` with every channel (alpha included) set to given value.
    ///
    pub const fn splat(value: S) -> Self {
        Color {
            r: value,
            g: value,
            b: value,
            a: value,
        }
    }
    /// Initializes gray `Color` with given alpha.
    ///
    pub const fn gray_alpha(value: S, a: S) -> Self {
        Color {
            r: value,
            g: value,
            b: value,
            a,
        }
    }

    /// Returns channels as an array (`[r, g, b, a]`).
    ///
    pub fn elements(&self) -> [S; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns red component of color.
    ///
    pub fn r(&self) -> S {
        self.r
    }
    /// Returns green component of color.
    ///
    pub fn g(&self) -> S {
        self.g
    }
    /// Returns blue component of color.
    ///
    pub fn b(&self) -> S {
        self.b
    }
    /// Returns alpha channel value of color.
    ///
    pub fn a(&self) -> S {
        self.a
    }
    /// Sets red component of color.
    ///
    pub fn set_r(&mut self, value: S) {
        self.r = value;
    }
    /// Sets green component of color.
    ///
    pub fn set_g(&mut self, value: S) {
        self.g = value;
    }
    /// Sets blue component of color.
    ///
    pub fn set_b(&mut self, value: S) {
        self.b = value;
    }
    /// Sets alpha channel value of color.
    ///
    pub fn set_a(&mut self, value: S) {
        self.a = value;
    }
}
impl<S: Channel> From<[S; 4]> for Color<S> {
    fn from(arr: [S; 4]) -> Self {
        Color::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// [`impl_float_color`] macro implements premultiplying conversion from 8-bit colors
/// into floating point colors.
///
macro_rules! impl_float_color {
    ($($t:ty),+ $(,)?) => {$(
        impl Color<$t> {
            /// Initializes floating point `Color` from 8-bit channels.
            ///
            /// Channels are normalized into `[0; 1]` and color channels are premultiplied by alpha:
            /// `r = (r / 255) * (a / 255)`, `a = a / 255`.
            ///
            pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
                let max: $t = <$t as From<u8>>::from(u8::MAX);
                let alpha: $t = <$t as From<u8>>::from(a) / max;
                Color {
                    r: <$t as From<u8>>::from(r) / max * alpha,
                    g: <$t as From<u8>>::from(g) / max * alpha,
                    b: <$t as From<u8>>::from(b) / max * alpha,
                    a: alpha,
                }
            }
        }
        impl From<Color<u8>> for Color<$t> {
            fn from(color: Color<u8>) -> Self {
                Self::from_rgba8(color.r, color.g, color.b, color.a)
            }
        }
    )+};
}
impl_float_color!(f32, f64);

impl<S> approx::AbsDiffEq for Color<S>
where
    S: Channel + approx::AbsDiffEq,
    S::Epsilon: Copy,
{
    type Epsilon = S::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        S::abs_diff_eq(&self.r, &other.r, epsilon)
            && S::abs_diff_eq(&self.g, &other.g, epsilon)
            && S::abs_diff_eq(&self.b, &other.b, epsilon)
            && S::abs_diff_eq(&self.a, &other.a, epsilon)
    }
}
impl<S> approx::RelativeEq for Color<S>
where
    S: Channel + approx::RelativeEq,
    S::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        S::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        S::relative_eq(&self.r, &other.r, epsilon, max_relative)
            && S::relative_eq(&self.g, &other.g, epsilon, max_relative)
            && S::relative_eq(&self.b, &other.b, epsilon, max_relative)
            && S::relative_eq(&self.a, &other.a, epsilon, max_relative)
    }
}
impl<S> approx::UlpsEq for Color<S>
where
    S: Channel + approx::UlpsEq,
    S::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        S::ulps_eq(&self.r, &other.r, epsilon, max_ulps)
            && S::ulps_eq(&self.g, &other.g, epsilon, max_ulps)
            && S::ulps_eq(&self.b, &other.b, epsilon, max_ulps)
            && S::ulps_eq(&self.a, &other.a, epsilon, max_ulps)
    }
}
