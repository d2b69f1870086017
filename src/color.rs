use std::fmt::Display;

/// A color triple labeled in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

/// A color triple labeled in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BGRColorFormat<T> {
    pub blue: T,
    pub green: T,
    pub red: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// Index of the channel inside a stored pixel.
    pub fn storage_index(&self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Blue => write!(f, "Blue"),
            Channel::Green => write!(f, "Green"),
            Channel::Red => write!(f, "Red"),
        }
    }
}

impl<T: Copy> RGBColorFormat<T> {
    pub fn channel(&self, channel: Channel) -> T {
        match channel {
            Channel::Blue => self.blue,
            Channel::Green => self.green,
            Channel::Red => self.red,
        }
    }
}

impl<T: Copy> From<[T; 3]> for BGRColorFormat<T> {
    fn from(value: [T; 3]) -> Self {
        BGRColorFormat {
            blue: value[0],
            green: value[1],
            red: value[2],
        }
    }
}

impl<T> From<BGRColorFormat<T>> for RGBColorFormat<T> {
    fn from(value: BGRColorFormat<T>) -> Self {
        RGBColorFormat {
            red: value.red,
            green: value.green,
            blue: value.blue,
        }
    }
}

impl<T> From<RGBColorFormat<T>> for BGRColorFormat<T> {
    fn from(value: RGBColorFormat<T>) -> Self {
        BGRColorFormat {
            blue: value.blue,
            green: value.green,
            red: value.red,
        }
    }
}

impl<T> From<BGRColorFormat<T>> for [T; 3] {
    fn from(value: BGRColorFormat<T>) -> Self {
        [value.blue, value.green, value.red]
    }
}

impl<T: Display> Display for RGBColorFormat<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Red: {}, Green: {}, Blue: {}",
            self.red, self.green, self.blue
        )
    }
}

#[cfg(test)]
mod test {
    use super::{BGRColorFormat, Channel, RGBColorFormat};

    #[test]
    fn stored_triple_is_labeled_blue_green_red() {
        let stored = BGRColorFormat::from([1_u8, 2, 3]);
        assert_eq!(stored.blue, 1);
        assert_eq!(stored.green, 2);
        assert_eq!(stored.red, 3);
    }

    #[test]
    fn relabel_keeps_channel_values() {
        let rgb = RGBColorFormat::from(BGRColorFormat::from([10_u8, 20, 30]));
        assert_eq!(
            rgb,
            RGBColorFormat {
                red: 30,
                green: 20,
                blue: 10
            }
        );
        let back: [u8; 3] = BGRColorFormat::from(rgb).into();
        assert_eq!(back, [10, 20, 30]);
    }

    #[test]
    fn select_single_channel() {
        let rgb = RGBColorFormat {
            red: 7_u8,
            green: 8,
            blue: 9,
        };
        assert_eq!(rgb.channel(Channel::Red), 7);
        assert_eq!(rgb.channel(Channel::Green), 8);
        assert_eq!(rgb.channel(Channel::Blue), 9);
    }

    #[test]
    fn display_in_report_order() {
        let rgb = RGBColorFormat {
            red: 200_u8,
            green: 120,
            blue: 75,
        };
        assert_eq!(rgb.to_string(), "Red: 200, Green: 120, Blue: 75");
    }
}
