mod button;
pub use button::*;

mod util;
pub use util::*;

mod input;
pub use input::*;

mod header;
pub use header::*;

mod caption_text;
pub use caption_text::*;

mod banner;
pub use banner::*;

mod layout;
pub use layout::*;

mod colors;
pub use colors::*;

mod styles;
pub use styles::*;
