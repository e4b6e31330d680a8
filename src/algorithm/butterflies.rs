use std::marker::PhantomData;

use num_complex::Complex;

use crate::common::{twiddle_mul, FftNum};
use crate::twiddles;
use crate::FftDirection;

/// Shape of one mixed-radix stage.
///
/// A stage reads `radix` interleaved sub-transforms laid out as `input[i + ido * (j + radix * k)]`
/// and writes `output[i + ido * (k + l1 * j)]`, where `i < ido`, `j < radix` and `k < l1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StageShape {
    /// Product of the radices of every earlier stage
    pub l1: usize,
    /// Inner stride, `len / (l1 * radix)`
    pub ido: usize,
}

impl StageShape {
    #[inline(always)]
    pub fn input_index(&self, radix: usize, i: usize, j: usize, k: usize) -> usize {
        i + self.ido * (j + radix * k)
    }
    #[inline(always)]
    pub fn output_index(&self, i: usize, k: usize, j: usize) -> usize {
        i + self.ido * (k + self.l1 * j)
    }
    /// Index of the twiddle applied to output `j` (`j >= 1`) at inner position `i` (`i >= 1`).
    #[inline(always)]
    pub fn twiddle_index(&self, j: usize, i: usize) -> usize {
        i - 1 + (j - 1) * (self.ido - 1)
    }
}

/// Runs one stage: a `RADIX`-point butterfly for every `(k, i)`, followed by the stage twiddles.
///
/// The twiddle for `i == 0` is always 1, so that column (and every column when `ido == 1`) is
/// stored without a multiply.
#[inline(always)]
fn run_stage<T: FftNum, const RADIX: usize>(
    shape: StageShape,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    direction: FftDirection,
    butterfly: impl Fn([Complex<T>; RADIX]) -> [Complex<T>; RADIX],
) {
    for k in 0..shape.l1 {
        let values = butterfly(std::array::from_fn(|j| {
            input[shape.input_index(RADIX, 0, j, k)]
        }));
        for (j, value) in values.into_iter().enumerate() {
            output[shape.output_index(0, k, j)] = value;
        }

        for i in 1..shape.ido {
            let values = butterfly(std::array::from_fn(|j| {
                input[shape.input_index(RADIX, i, j, k)]
            }));
            let mut values = values.into_iter();
            if let Some(first) = values.next() {
                output[shape.output_index(i, k, 0)] = first;
            }
            for (j, value) in values.enumerate().map(|(j, value)| (j + 1, value)) {
                let twiddle = twiddles[shape.twiddle_index(j, i)];
                output[shape.output_index(i, k, j)] = twiddle_mul(twiddle, value, direction);
            }
        }
    }
}

// i * value
#[inline(always)]
fn mul_i<T: FftNum>(value: Complex<T>) -> Complex<T> {
    Complex {
        re: -value.im,
        im: value.re,
    }
}

pub struct Butterfly2<T> {
    direction: FftDirection,
    _phantom: PhantomData<T>,
}
impl<T: FftNum> Butterfly2<T> {
    #[inline(always)]
    pub fn new(direction: FftDirection) -> Self {
        Self {
            direction,
            _phantom: PhantomData,
        }
    }
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 2]) -> [Complex<T>; 2] {
        [values[0] + values[1], values[0] - values[1]]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}

pub struct Butterfly3<T> {
    twiddle: Complex<T>,
    direction: FftDirection,
}
impl<T: FftNum> Butterfly3<T> {
    #[inline(always)]
    pub fn new(direction: FftDirection) -> Self {
        Self {
            twiddle: twiddles::compute_twiddle(1, 3, direction),
            direction,
        }
    }
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 3]) -> [Complex<T>; 3] {
        let xp = values[1] + values[2];
        let xn = values[1] - values[2];
        let sum = values[0] + xp;

        let temp_a = values[0] + xp * self.twiddle.re;
        let temp_b = mul_i(xn * self.twiddle.im);

        [sum, temp_a + temp_b, temp_a - temp_b]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}

pub struct Butterfly4<T> {
    direction: FftDirection,
    _phantom: PhantomData<T>,
}
impl<T: FftNum> Butterfly4<T> {
    #[inline(always)]
    pub fn new(direction: FftDirection) -> Self {
        Self {
            direction,
            _phantom: PhantomData,
        }
    }
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 4]) -> [Complex<T>; 4] {
        // two size-2 transforms on the even and odd samples, then a cross transform with the
        // 90 degree rotation in place of the only non-trivial twiddle
        let sum02 = values[0] + values[2];
        let diff02 = values[0] - values[2];
        let sum13 = values[1] + values[3];
        let diff13 = twiddles::rotate_90(values[1] - values[3], self.direction);

        [
            sum02 + sum13,
            diff02 + diff13,
            sum02 - sum13,
            diff02 - diff13,
        ]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}

pub struct Butterfly5<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    direction: FftDirection,
}
impl<T: FftNum> Butterfly5<T> {
    pub fn new(direction: FftDirection) -> Self {
        Self {
            twiddle1: twiddles::compute_twiddle(1, 5, direction),
            twiddle2: twiddles::compute_twiddle(2, 5, direction),
            direction,
        }
    }
    // Pairing x[j] with x[5 - j] turns the 5-point DFT into cosine terms on the sums and sine
    // terms on the differences:
    //   X[u]     = x0 + sum_j cos(2*pi*j*u/5) * (x[j] + x[5-j]) + i * sum_j s*sin(2*pi*j*u/5) * (x[j] - x[5-j])
    //   X[5 - u] = same cosine part minus the same sine part
    // where s = -1 for forward transforms. Products j*u past 5/2 wrap around to 5 - (j*u mod 5)
    // with the sine negated.
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 5]) -> [Complex<T>; 5] {
        let (tw1, tw2) = (self.twiddle1, self.twiddle2);

        let sum14 = values[1] + values[4];
        let diff14 = values[1] - values[4];
        let sum23 = values[2] + values[3];
        let diff23 = values[2] - values[3];

        let x0 = values[0];
        let output0 = x0 + sum14 + sum23;

        let a1 = x0 + sum14 * tw1.re + sum23 * tw2.re;
        let b1 = mul_i(diff14 * tw1.im + diff23 * tw2.im);

        let a2 = x0 + sum14 * tw2.re + sum23 * tw1.re;
        let b2 = mul_i(diff14 * tw2.im - diff23 * tw1.im);

        [output0, a1 + b1, a2 + b2, a2 - b2, a1 - b1]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}

pub struct Butterfly7<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    twiddle3: Complex<T>,
    direction: FftDirection,
}
impl<T: FftNum> Butterfly7<T> {
    pub fn new(direction: FftDirection) -> Self {
        Self {
            twiddle1: twiddles::compute_twiddle(1, 7, direction),
            twiddle2: twiddles::compute_twiddle(2, 7, direction),
            twiddle3: twiddles::compute_twiddle(3, 7, direction),
            direction,
        }
    }
    // Same sum/difference pairing as Butterfly5.
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 7]) -> [Complex<T>; 7] {
        let (tw1, tw2, tw3) = (self.twiddle1, self.twiddle2, self.twiddle3);

        let sum16 = values[1] + values[6];
        let diff16 = values[1] - values[6];
        let sum25 = values[2] + values[5];
        let diff25 = values[2] - values[5];
        let sum34 = values[3] + values[4];
        let diff34 = values[3] - values[4];

        let x0 = values[0];
        let output0 = x0 + sum16 + sum25 + sum34;

        let a1 = x0 + sum16 * tw1.re + sum25 * tw2.re + sum34 * tw3.re;
        let b1 = mul_i(diff16 * tw1.im + diff25 * tw2.im + diff34 * tw3.im);

        let a2 = x0 + sum16 * tw2.re + sum25 * tw3.re + sum34 * tw1.re;
        let b2 = mul_i(diff16 * tw2.im - diff25 * tw3.im - diff34 * tw1.im);

        let a3 = x0 + sum16 * tw3.re + sum25 * tw1.re + sum34 * tw2.re;
        let b3 = mul_i(diff16 * tw3.im - diff25 * tw1.im + diff34 * tw2.im);

        [
            output0,
            a1 + b1,
            a2 + b2,
            a3 + b3,
            a3 - b3,
            a2 - b2,
            a1 - b1,
        ]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}

pub struct Butterfly11<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    twiddle3: Complex<T>,
    twiddle4: Complex<T>,
    twiddle5: Complex<T>,
    direction: FftDirection,
}
impl<T: FftNum> Butterfly11<T> {
    pub fn new(direction: FftDirection) -> Self {
        Self {
            twiddle1: twiddles::compute_twiddle(1, 11, direction),
            twiddle2: twiddles::compute_twiddle(2, 11, direction),
            twiddle3: twiddles::compute_twiddle(3, 11, direction),
            twiddle4: twiddles::compute_twiddle(4, 11, direction),
            twiddle5: twiddles::compute_twiddle(5, 11, direction),
            direction,
        }
    }
    // Same sum/difference pairing as Butterfly5. Row u uses twiddle (j*u mod 11) for pair j,
    // folded into 1..=5 with a sign flip on the sine term.
    #[inline(always)]
    pub fn perform_fft_array(&self, values: [Complex<T>; 11]) -> [Complex<T>; 11] {
        let (tw1, tw2, tw3, tw4, tw5) = (
            self.twiddle1,
            self.twiddle2,
            self.twiddle3,
            self.twiddle4,
            self.twiddle5,
        );

        let sum1 = values[1] + values[10];
        let diff1 = values[1] - values[10];
        let sum2 = values[2] + values[9];
        let diff2 = values[2] - values[9];
        let sum3 = values[3] + values[8];
        let diff3 = values[3] - values[8];
        let sum4 = values[4] + values[7];
        let diff4 = values[4] - values[7];
        let sum5 = values[5] + values[6];
        let diff5 = values[5] - values[6];

        let x0 = values[0];
        let output0 = x0 + sum1 + sum2 + sum3 + sum4 + sum5;

        // u = 1: 1, 2, 3, 4, 5
        let a1 = x0 + sum1 * tw1.re + sum2 * tw2.re + sum3 * tw3.re + sum4 * tw4.re + sum5 * tw5.re;
        let b1 = mul_i(
            diff1 * tw1.im + diff2 * tw2.im + diff3 * tw3.im + diff4 * tw4.im + diff5 * tw5.im,
        );

        // u = 2: 2, 4, -5, -3, -1
        let a2 = x0 + sum1 * tw2.re + sum2 * tw4.re + sum3 * tw5.re + sum4 * tw3.re + sum5 * tw1.re;
        let b2 = mul_i(
            diff1 * tw2.im + diff2 * tw4.im - diff3 * tw5.im - diff4 * tw3.im - diff5 * tw1.im,
        );

        // u = 3: 3, -5, -2, 1, 4
        let a3 = x0 + sum1 * tw3.re + sum2 * tw5.re + sum3 * tw2.re + sum4 * tw1.re + sum5 * tw4.re;
        let b3 = mul_i(
            diff1 * tw3.im - diff2 * tw5.im - diff3 * tw2.im + diff4 * tw1.im + diff5 * tw4.im,
        );

        // u = 4: 4, -3, 1, 5, -2
        let a4 = x0 + sum1 * tw4.re + sum2 * tw3.re + sum3 * tw1.re + sum4 * tw5.re + sum5 * tw2.re;
        let b4 = mul_i(
            diff1 * tw4.im - diff2 * tw3.im + diff3 * tw1.im + diff4 * tw5.im - diff5 * tw2.im,
        );

        // u = 5: 5, -1, 4, -2, 3
        let a5 = x0 + sum1 * tw5.re + sum2 * tw1.re + sum3 * tw4.re + sum4 * tw2.re + sum5 * tw3.re;
        let b5 = mul_i(
            diff1 * tw5.im - diff2 * tw1.im + diff3 * tw4.im - diff4 * tw2.im + diff5 * tw3.im,
        );

        [
            output0,
            a1 + b1,
            a2 + b2,
            a3 + b3,
            a4 + b4,
            a5 + b5,
            a5 - b5,
            a4 - b4,
            a3 - b3,
            a2 - b2,
            a1 - b1,
        ]
    }
    pub fn pass(
        &self,
        shape: StageShape,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        twiddles: &[Complex<T>],
    ) {
        run_stage(shape, input, output, twiddles, self.direction, |values| {
            self.perform_fft_array(values)
        });
    }
}
