/*
    ChronoFox
    https://github.com/dbalsom/chronofox

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

use std::collections::HashMap;

use chronofox::item::Category;
use egui::Color32;

pub fn default_palette() -> HashMap<Category, Color32> {
    let pal_blue = Color32::from_rgb(0x60, 0xa5, 0xfa);
    let pal_green = Color32::from_rgb(0x34, 0xd3, 0x99);
    let pal_amber = Color32::from_rgb(0xfb, 0xbf, 0x24);

    HashMap::from([
        (Category::Work, pal_blue),
        (Category::Personal, pal_green),
        (Category::Health, pal_amber),
    ])
}

/// Color for a category, falling back to the ui text color for palette gaps.
pub fn category_color(palette: &HashMap<Category, Color32>, category: Category, fallback: Color32) -> Color32 {
    palette.get(&category).copied().unwrap_or(fallback)
}
