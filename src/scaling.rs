/// Size of `original` scaled by `min(target_w / w, target_h / h)`, truncated
/// to whole pixels.
///
/// The ratio is compared by cross-multiplying, so the bounding dimension
/// lands exactly on its target instead of one pixel short. Neither side goes
/// below one pixel.
pub fn fit_within(original: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (w, h) = (original.0 as u64, original.1 as u64);
    let (tw, th) = (target.0 as u64, target.1 as u64);
    if w == 0 || h == 0 {
        return (0, 0);
    }

    let (scaled_w, scaled_h) = if w * th >= h * tw {
        // width is the tighter bound
        (tw, h * tw / w)
    } else {
        (w * th / h, th)
    };
    (scaled_w.max(1) as u32, scaled_h.max(1) as u32)
}
