use super::*;

#[test]
fn size_modifier_distinguishes_renditions() {
    assert_eq!(size_modifier(PosterSize::Thumbnail), "poster--thumb");
    assert_eq!(size_modifier(PosterSize::Large), "poster--large");
}
