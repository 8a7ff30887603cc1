#![allow(dead_code)]

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

pub fn display_bits(width: usize, bits: &[bool]) {
    let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
    let quiet_zone_h = str::repeat(WHITE, PADDING);

    println!("{quiet_zone_v}");
    for chunk in bits.chunks(width) {
        print!("{quiet_zone_h}");
        for &on in chunk { print!("{}", if on { BLACK } else { WHITE }); }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\x1B[0m");
}

pub fn display_bitmap(width: usize, bitmap: &[u8]) {
    let stride = (width + 7) / 8;
    let bits: Vec<bool> = bitmap.chunks(stride)
        .flat_map(|row| (0..width).map(move |x| row[x / 8] & (0x80 >> (x % 8)) != 0))
        .collect();
    display_bits(width, &bits);
}
