use code128b::*;

mod utils;

const CARRIER: &str = "/ABC123";
const W: usize = code128_len!(CARRIER.len());
const H: usize = 6;

fn main() {
    let carrier = CarrierNumber::parse(CARRIER).unwrap();
    let pattern = carrier.encode().unwrap();
    println!("{carrier}: {pattern}");

    let mut storage = [false; W * H];
    Code128Render::new(&pattern)
        .set_size((W as u32, H as u32))
        .fill_bits(&mut storage[..]);
    utils::display_bits(W, &storage);

    // same barcode packed 8 pixels per byte
    let mut bitmap = [0u8; code128_bitmap_len!(W, H)];
    Code128Render::new(&pattern)
        .set_size((W as u32, H as u32))
        .fill_bitmap(&mut bitmap[..]);
    utils::display_bitmap(W, &bitmap);
}
