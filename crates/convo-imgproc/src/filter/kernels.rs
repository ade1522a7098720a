use std::fmt;

/// A 3x3 convolution kernel.
///
/// Weights are indexed `[row][col]` and the center `[1][1]` is aligned with the pixel being
/// computed. No normalization is enforced: blur kernels sum to one, edge kernels do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f64; 3]; 3],
}

impl Kernel {
    /// The identity kernel, reproduces the source image.
    pub const IDENTITY: Kernel = Kernel::new([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);

    /// Create a kernel from its weights in row-major order.
    pub const fn new(weights: [[f64; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Get the weight at the given kernel row and column.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is greater than 2.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.weights[row][col]
    }

    /// Get the kernel weights.
    pub fn weights(&self) -> &[[f64; 3]; 3] {
        &self.weights
    }

    /// Sum of all the kernel weights.
    ///
    /// Kernels summing to one preserve the brightness of uniform regions.
    pub fn sum(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The named filters available in the kernel catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelType {
    /// Laplacian edge detection.
    Edge,
    /// Sharpening, the identity plus the laplacian.
    Sharpen,
    /// Box blur, the mean of the 3x3 neighborhood.
    Blur,
    /// Gaussian blur.
    Gauss,
    /// Emboss.
    Emboss,
    /// Copies the image unchanged.
    Identity,
}

// indexed by `KernelType as usize`
static KERNELS: [Kernel; 6] = [
    Kernel::new([[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]]),
    Kernel::new([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]),
    Kernel::new([
        [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
        [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
        [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
    ]),
    Kernel::new([
        [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
        [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
        [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    ]),
    Kernel::new([[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]]),
    Kernel::IDENTITY,
];

impl KernelType {
    /// All the entries of the catalog.
    pub const ALL: [KernelType; 6] = [
        KernelType::Edge,
        KernelType::Sharpen,
        KernelType::Blur,
        KernelType::Gauss,
        KernelType::Emboss,
        KernelType::Identity,
    ];

    /// Resolve a filter name to a kernel type.
    ///
    /// Unknown names resolve to [`KernelType::Identity`]. This is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use convo_imgproc::filter::kernels::KernelType;
    ///
    /// assert_eq!(KernelType::from_name("gauss"), KernelType::Gauss);
    /// assert_eq!(KernelType::from_name("unknown"), KernelType::Identity);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "edge" => KernelType::Edge,
            "sharpen" => KernelType::Sharpen,
            "blur" => KernelType::Blur,
            "gauss" => KernelType::Gauss,
            "emboss" => KernelType::Emboss,
            _ => KernelType::Identity,
        }
    }

    /// The name of the filter as accepted by [`KernelType::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            KernelType::Edge => "edge",
            KernelType::Sharpen => "sharpen",
            KernelType::Blur => "blur",
            KernelType::Gauss => "gauss",
            KernelType::Emboss => "emboss",
            KernelType::Identity => "identity",
        }
    }

    /// The 3x3 weights of the filter.
    pub fn kernel(&self) -> Kernel {
        KERNELS[*self as usize]
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a kernel by filter name.
///
/// Returns the identity kernel for any unrecognized name.
///
/// # Arguments
///
/// * `name` - The filter name, one of `edge`, `sharpen`, `blur`, `gauss` or `emboss`.
pub fn lookup(name: &str) -> Kernel {
    KernelType::from_name(name).kernel()
}
