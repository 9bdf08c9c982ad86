//! Seeded force-directed layout (Fruchterman–Reingold).
//!
//! The PRNG is a fixed xorshift so the same input and seed always give
//! identical coordinates; reruns must produce byte-identical charts.

/// Minimal xorshift64 PRNG. Not cryptographic, just deterministic.
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // A zero state would stay zero forever.
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform sample in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Compute a Fruchterman–Reingold layout in the unit square.
///
/// `edges` are position pairs over `0..node_count`; duplicates and
/// direction are irrelevant, forces are symmetric.
pub fn fruchterman_reingold(
    node_count: usize,
    edges: &[(usize, usize)],
    iterations: usize,
    seed: u64,
) -> Vec<(f64, f64)> {
    let mut rng = XorShift64::new(seed);
    let mut positions: Vec<(f64, f64)> = (0..node_count)
        .map(|_| (rng.next_f64(), rng.next_f64()))
        .collect();

    if node_count <= 1 {
        return positions;
    }

    let k = (1.0 / node_count as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (iterations.max(1) as f64);

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); node_count];

        // Repulsion between all pairs.
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let (dx, dy) = delta(positions[i], positions[j], &mut rng);
                let d = (dx * dx + dy * dy).sqrt();
                let force = k * k / d;
                let (fx, fy) = (dx / d * force, dy / d * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges.
        for &(a, b) in edges {
            if a == b {
                continue;
            }
            let (dx, dy) = delta(positions[a], positions[b], &mut rng);
            let d = (dx * dx + dy * dy).sqrt();
            let force = d * d / k;
            let (fx, fy) = (dx / d * force, dy / d * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        // Displace, capped by the cooling temperature.
        for (pos, (dx, dy)) in positions.iter_mut().zip(&disp) {
            let d = (dx * dx + dy * dy).sqrt();
            if d > 0.0 {
                let limited = d.min(temperature);
                pos.0 = (pos.0 + dx / d * limited).clamp(0.0, 1.0);
                pos.1 = (pos.1 + dy / d * limited).clamp(0.0, 1.0);
            }
        }

        temperature = (temperature - cooling).max(1e-4);
    }

    positions
}

/// Separation vector, jittered when two nodes coincide so forces never
/// divide by zero.
fn delta(a: (f64, f64), b: (f64, f64), rng: &mut XorShift64) -> (f64, f64) {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    if dx * dx + dy * dy < 1e-12 {
        (rng.next_f64() * 1e-3 + 1e-6, rng.next_f64() * 1e-3 + 1e-6)
    } else {
        (dx, dy)
    }
}
