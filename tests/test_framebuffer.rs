use pixel_fb::prelude::*;
use pixel_fb::util::Rand;

fn red_panel(w: i32, h: i32) -> FlatBuffer<Rgb565Be> {
    FlatBuffer::filled(Rect::new(0, 0, w, h), encode(255, 0, 0))
}

#[test]
fn test_vector_scroll_moves_block_left() {
    let red = encode(255, 0, 0);
    let blue = encode(0, 0, 255);
    let mut fb = Framebuffer::with_double_buffer(red_panel(4, 4)).expect("framebuffer");

    fb.fill(Rect::new(1, 1, 3, 3), &Rgba8::BLUE);
    fb.vector_scroll(Rect::new(0, 0, 4, 4), Point::new(1, 0));

    for y in 0..4 {
        for x in 0..4 {
            let want = if (1..3).contains(&y) && (0..2).contains(&x) {
                blue
            } else {
                red
            };
            assert_eq!(fb.at(x, y), want, "pixel ({}, {})", x, y);
        }
    }
    // column 3 holds what column 0 held, which was red
    assert_eq!(fb.at(3, 1), red);
    assert_eq!(fb.dirty(), Rect::new(0, 0, 4, 4));
}

#[test]
fn test_white_survives_the_codec() {
    assert_eq!(decode(encode(255, 255, 255)), (255, 255, 255, 255));

    let mut fb: Framebuffer<Rgb565Be> = Framebuffer::new(Rect::new(0, 0, 1, 1)).expect("framebuffer");
    fb.set(0, 0, &Rgba8::WHITE);
    let (r, g, b, a) = fb.at(0, 0).rgba();
    assert_eq!((r, g, b, a), (0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
}

#[test]
fn test_flush_matches_working_buffer() {
    let mut rng = Rand::new();
    rng.srand(2024);
    let base: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 32, 24));
    let mut fb = Framebuffer::with_double_buffer(base).expect("framebuffer");

    for round in 0..20 {
        for _ in 0..10 {
            let x = rng.rand_range(-4, 36);
            let y = rng.rand_range(-4, 28);
            fb.set(x, y, &Rgb565Be(rng.rand() as u16));
        }
        let x0 = rng.rand_range(0, 32);
        let y0 = rng.rand_range(0, 24);
        fb.fill(
            Rect::new(x0, y0, x0 + rng.rand_range(1, 8), y0 + rng.rand_range(1, 8)),
            &Rgba8::new(rng.rand_u8(), rng.rand_u8(), rng.rand_u8()),
        );
        if round % 5 == 0 {
            fb.region_scroll(Rect::new(4, 4, 20, 20), rng.rand_range(-3, 4));
        }
        fb.flush();
        assert!(!fb.is_dirty());
        assert_eq!(fb.backing().expect("backing"), fb.buffer(), "round {}", round);
    }
}

#[test]
fn test_second_flush_is_noop() {
    let mut fb = Framebuffer::with_double_buffer(red_panel(8, 8)).expect("framebuffer");
    fb.set(2, 2, &Rgba8::GREEN);
    fb.flush();
    let presented = fb.backing().expect("backing").clone();

    fb.flush();
    assert_eq!(fb.backing().expect("backing"), &presented);
    assert!(!fb.is_dirty());
}

#[test]
fn test_partial_flush_leaves_clean_area() {
    let mut fb = Framebuffer::with_double_buffer(red_panel(8, 8)).expect("framebuffer");
    fb.set(1, 1, &Rgba8::GREEN);
    fb.flush();

    // mark the backing so a full copy would overwrite it
    let (working, backing) = fb.into_parts();
    let mut backing = backing.expect("backing");
    backing.set_pixel(7, 7, encode(0, 0, 255));
    let mut fb = Framebuffer::from_parts(working, backing).expect("same size");

    fb.set(0, 0, &Rgba8::WHITE);
    fb.flush();
    let presented = fb.backing().expect("backing");
    assert_eq!(presented.at(0, 0), encode(255, 255, 255));
    // outside the dirty rect, the backing keeps its own pixel
    assert_eq!(presented.at(7, 7), encode(0, 0, 255));
}

#[test]
fn test_linear_scroll_round_trip() {
    let mut rng = Rand::new();
    rng.srand(9);
    let (w, h) = (16, 12);
    let mut fb: Framebuffer<Rgba8> = Framebuffer::new(Rect::new(0, 0, w, h)).expect("framebuffer");
    for y in 0..h {
        for x in 0..w {
            fb.set(x, y, &Rgba8::new(rng.rand_u8(), rng.rand_u8(), rng.rand_u8()));
        }
    }
    let orig = fb.buffer().clone();
    for k in 1..h {
        let mut copy = Framebuffer::wrap(orig.clone()).expect("framebuffer");
        copy.scroll(k);
        copy.scroll(-k);
        for y in k..h {
            for x in 0..w {
                assert_eq!(copy.at(x, y), orig.at(x, y), "k={} ({}, {})", k, x, y);
            }
        }
    }
}

#[test]
fn test_vector_scroll_round_trip() {
    let mut rng = Rand::new();
    rng.srand(77);
    let area = Rect::new(0, 0, 20, 15);
    let mut fb: Framebuffer<Rgb565Be> = Framebuffer::new(area).expect("framebuffer");
    for y in 0..15 {
        for x in 0..20 {
            fb.set(x, y, &Rgb565Be(rng.rand() as u16));
        }
    }
    let orig = fb.buffer().clone();
    let region = Rect::new(3, 2, 17, 13);
    for _ in 0..200 {
        let v = Point::new(rng.rand_range(-20, 21), rng.rand_range(-15, 16));
        fb.vector_scroll(region, v);
        fb.vector_scroll(region, Point::new(-v.x, -v.y));
        assert_eq!(fb.buffer(), &orig, "vector {:?}", v);
    }
}

#[test]
fn test_blit_paths_agree_with_flush_to() {
    struct Checker;

    impl Image for Checker {
        type Pixel = Rgba8;

        fn bounds(&self) -> Rect {
            Rect::new(0, 0, 6, 6)
        }

        fn at(&self, x: i32, y: i32) -> Rgba8 {
            if (x + y) % 2 == 0 {
                Rgba8::WHITE
            } else {
                Rgba8::BLACK
            }
        }
    }

    let mut converted: Framebuffer<Rgb565Be> = Framebuffer::new(Rect::new(0, 0, 10, 10)).expect("fb");
    converted.blit(&Checker, Point::new(2, 2));

    let mut copied: Framebuffer<Rgb565Be> = Framebuffer::new(Rect::new(0, 0, 10, 10)).expect("fb");
    copied.blit(&converted, Point::zero());
    assert_eq!(copied.buffer(), converted.buffer());

    let mut panel: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 10, 10));
    converted.flush_to(&mut panel);
    assert_eq!(&panel, converted.buffer());
    assert_eq!(panel.at(2, 2), encode(255, 255, 255));
    assert_eq!(panel.at(3, 2), encode(0, 0, 0));
}
