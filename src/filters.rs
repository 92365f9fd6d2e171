//! Search filter tokens.
//!
//! Each filter option maps to an opaque upstream token (`isc:red`,
//! `il:cl`, ...). [`Filter`] wraps any of them and can be parsed from
//! `"category:option"` text.

use std::fmt;
use std::str::FromStr;

macro_rules! filter_table {
    (
        $(#[$meta:meta])*
        $name:ident, $category:literal {
            $($variant:ident => $option:literal, $token:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl $name {
            /// All options of this category.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Category name used when parsing a [`Filter`].
            pub const CATEGORY: &'static str = $category;

            /// Upstream token for this option.
            #[must_use]
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Option name used when parsing a [`Filter`].
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $option,)+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($option => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$name> for Filter {
            fn from(value: $name) -> Self {
                Self::$name(value)
            }
        }
    };
}

filter_table! {
    /// Dominant color.
    Color, "color" {
        Red => "red", "isc:red";
        Orange => "orange", "isc:orange";
        Yellow => "yellow", "isc:yellow";
        Green => "green", "isc:green";
        // upstream spelling
        Teal => "teal", "isc:teel";
        Blue => "blue", "isc:blue";
        Purple => "purple", "isc:purple";
        Pink => "pink", "isc:pink";
        White => "white", "isc:white";
        Gray => "gray", "isc:gray";
        Black => "black", "isc:black";
        Brown => "brown", "isc:brown";
    }
}

filter_table! {
    /// Full color, grayscale, or transparent background.
    ColorType, "color-type" {
        Color => "color", "ic:full";
        Grayscale => "grayscale", "ic:gray";
        Transparent => "transparent", "ic:trans";
    }
}

filter_table! {
    /// Usage rights.
    License, "license" {
        CreativeCommons => "creative-commons", "il:cl";
        Other => "other", "il:ol";
    }
}

filter_table! {
    /// Kind of image.
    ImageType, "type" {
        Face => "face", "itp:face";
        Photo => "photo", "itp:photo";
        Clipart => "clipart", "itp:clipart";
        Lineart => "lineart", "itp:lineart";
        Animated => "animated", "itp:animated";
    }
}

filter_table! {
    /// How recently the image was indexed.
    Time, "time" {
        PastDay => "past-day", "qdr:d";
        PastWeek => "past-week", "qdr:w";
        PastMonth => "past-month", "qdr:m";
        PastYear => "past-year", "qdr:y";
    }
}

filter_table! {
    /// Image shape.
    AspectRatio, "aspect-ratio" {
        Tall => "tall", "iar:t";
        Square => "square", "iar:s";
        Wide => "wide", "iar:w";
        Panoramic => "panoramic", "iar:xw";
    }
}

filter_table! {
    /// File format.
    Format, "format" {
        Jpg => "jpg", "ift:jpg";
        Gif => "gif", "ift:gif";
        Png => "png", "ift:png";
        Bmp => "bmp", "ift:bmp";
        Svg => "svg", "ift:svg";
        Webp => "webp", "ift:webp";
        Ico => "ico", "ift:ico";
        Raw => "raw", "ift:craw";
    }
}

/// Any search filter.
///
/// # Example
///
/// ```rust
/// use rs_imagesearch::filters::{Color, Filter};
///
/// let filter: Filter = "color:red".parse()?;
/// assert_eq!(filter, Filter::from(Color::Red));
/// assert_eq!(filter.token(), "isc:red");
/// # Ok::<(), rs_imagesearch::filters::ParseFilterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Color(Color),
    ColorType(ColorType),
    License(License),
    ImageType(ImageType),
    Time(Time),
    AspectRatio(AspectRatio),
    Format(Format),
}

impl Filter {
    /// Upstream token for this filter.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Color(f) => f.token(),
            Self::ColorType(f) => f.token(),
            Self::License(f) => f.token(),
            Self::ImageType(f) => f.token(),
            Self::Time(f) => f.token(),
            Self::AspectRatio(f) => f.token(),
            Self::Format(f) => f.token(),
        }
    }
}

impl AsRef<str> for Filter {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (category, option) = match self {
            Self::Color(v) => (Color::CATEGORY, v.name()),
            Self::ColorType(v) => (ColorType::CATEGORY, v.name()),
            Self::License(v) => (License::CATEGORY, v.name()),
            Self::ImageType(v) => (ImageType::CATEGORY, v.name()),
            Self::Time(v) => (Time::CATEGORY, v.name()),
            Self::AspectRatio(v) => (AspectRatio::CATEGORY, v.name()),
            Self::Format(v) => (Format::CATEGORY, v.name()),
        };
        write!(f, "{category}:{option}")
    }
}

/// Error returned when filter text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFilterError {
    /// Text was not of the form `category:option`.
    #[error("expected 'category:option', got '{0}'")]
    Syntax(String),
    /// Category is not known.
    #[error("unknown filter category '{0}'")]
    UnknownCategory(String),
    /// Option is not known within its category.
    #[error("unknown option '{option}' for filter '{category}'")]
    UnknownOption {
        /// Category the option was looked up in.
        category: String,
        /// Option that was not found.
        option: String,
    },
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, option) = s
            .split_once(':')
            .ok_or_else(|| ParseFilterError::Syntax(s.to_string()))?;
        let category = category.trim().to_ascii_lowercase();
        let option = option.trim().to_ascii_lowercase();

        let parsed = match category.as_str() {
            Color::CATEGORY => Color::from_name(&option).map(Self::from),
            ColorType::CATEGORY => ColorType::from_name(&option).map(Self::from),
            License::CATEGORY => License::from_name(&option).map(Self::from),
            ImageType::CATEGORY => ImageType::from_name(&option).map(Self::from),
            Time::CATEGORY => Time::from_name(&option).map(Self::from),
            AspectRatio::CATEGORY => AspectRatio::from_name(&option).map(Self::from),
            Format::CATEGORY => Format::from_name(&option).map(Self::from),
            _ => return Err(ParseFilterError::UnknownCategory(category)),
        };

        parsed.ok_or(ParseFilterError::UnknownOption { category, option })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_upstream_values() {
        assert_eq!(Color::Teal.token(), "isc:teel");
        assert_eq!(ColorType::Transparent.token(), "ic:trans");
        assert_eq!(License::CreativeCommons.token(), "il:cl");
        assert_eq!(ImageType::Clipart.token(), "itp:clipart");
        assert_eq!(Time::PastWeek.token(), "qdr:w");
        assert_eq!(AspectRatio::Panoramic.token(), "iar:xw");
        assert_eq!(Format::Raw.token(), "ift:craw");
    }

    #[test]
    fn every_option_parses_back_from_display() {
        let all: Vec<Filter> = Color::ALL
            .iter()
            .map(|&v| Filter::from(v))
            .chain(ColorType::ALL.iter().map(|&v| v.into()))
            .chain(License::ALL.iter().map(|&v| v.into()))
            .chain(ImageType::ALL.iter().map(|&v| v.into()))
            .chain(Time::ALL.iter().map(|&v| v.into()))
            .chain(AspectRatio::ALL.iter().map(|&v| v.into()))
            .chain(Format::ALL.iter().map(|&v| v.into()))
            .collect();

        assert_eq!(all.len(), 12 + 3 + 2 + 5 + 4 + 4 + 8);
        for filter in all {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn parsing_is_case_and_space_insensitive() {
        assert_eq!(
            " License : Creative-Commons".parse::<Filter>(),
            Ok(Filter::License(License::CreativeCommons))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("red".parse::<Filter>(), Err(ParseFilterError::Syntax("red".to_string())));
        assert_eq!(
            "shade:red".parse::<Filter>(),
            Err(ParseFilterError::UnknownCategory("shade".to_string()))
        );
        assert_eq!(
            "color:mauve".parse::<Filter>(),
            Err(ParseFilterError::UnknownOption {
                category: "color".to_string(),
                option: "mauve".to_string(),
            })
        );
    }
}
