use rayon::prelude::*;

use rasterkit_image::Image;

/// Apply a function to every row of every channel plane of `dst` in parallel.
///
/// The closure receives the channel index, the row index and the row slice.
pub fn par_iter_planar_rows<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Copy + Send + Sync,
{
    let (cols, rows) = (dst.cols(), dst.rows());

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(idx, row)| f(idx / rows, idx % rows, row));
}

/// Apply a function to each element of the image in parallel with a value.
pub fn par_iter_val<T1, T2, const C: usize>(
    src: &Image<T1, C>,
    dst: &mut Image<T2, C>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Copy + Send + Sync,
    T2: Copy + Send + Sync,
{
    src.as_slice()
        .par_iter()
        .zip(dst.as_slice_mut().par_iter_mut())
        .for_each(|(src_val, dst_val)| f(src_val, dst_val));
}

/// Apply a function to each element of two images in parallel.
pub fn par_iter_val_two<T1, T2, T3, const C: usize>(
    src1: &Image<T1, C>,
    src2: &Image<T2, C>,
    dst: &mut Image<T3, C>,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Copy + Send + Sync,
    T2: Copy + Send + Sync,
    T3: Copy + Send + Sync,
{
    src1.as_slice()
        .par_iter()
        .zip(src2.as_slice().par_iter())
        .zip(dst.as_slice_mut().par_iter_mut())
        .for_each(|((a, b), out)| f(a, b, out));
}

/// Apply a function to the three co-located values of every pixel of a
/// three-channel image in parallel, in place.
pub fn par_iter_pixels3_mut<T>(
    image: &mut Image<T, 3>,
    f: impl Fn(&mut T, &mut T, &mut T) + Send + Sync,
) where
    T: Copy + Send + Sync,
{
    let plane_len = image.plane_len();
    let (p0, rest) = image.as_slice_mut().split_at_mut(plane_len);
    let (p1, p2) = rest.split_at_mut(plane_len);

    p0.par_iter_mut()
        .zip(p1.par_iter_mut())
        .zip(p2.par_iter_mut())
        .for_each(|((a, b), c)| f(a, b, c));
}
