use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One raw row, formatted the way scraped listings arrive.
#[derive(Serialize)]
struct RawListing {
    name: String,
    score: String,
    lowest_price: String,
    comment: String,
    stress: String,
    link: String,
}

fn yen(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::from("￥");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn generate(rng: &mut SimpleRng, count: usize) -> Vec<RawListing> {
    let genres = ["寿司", "おでん", "治部煮", "ラーメン", "カレー", "和菓子", "喫茶"];
    let areas = ["片町", "香林坊", "東山", "近江町", "金沢駅前"];
    let comments = ["地元の人気店", "観光客にも人気", "コスパ良好", "予約推奨", "行列必至"];
    let stress = ["low", "medium", "high"];

    (0..count)
        .map(|i| {
            let genre = rng.pick(&genres);
            let area = rng.pick(&areas);
            let score = rng.gauss(3.4, 0.35).clamp(2.5, 4.8);
            let price = (rng.gauss(4500.0, 3500.0).clamp(500.0, 30000.0) / 100.0).round() as u64 * 100;

            // Two rows in every 17 carry a value the cleaner has to drop.
            let (score, lowest_price) = match i % 17 {
                5 => ("-".to_string(), yen(price)),
                11 => (format!("{score:.2}"), "価格不明".to_string()),
                _ => (format!("{score:.2}"), yen(price)),
            };

            RawListing {
                name: format!("{area}の{genre} {i:03}"),
                score,
                lowest_price,
                comment: rng.pick(&comments).to_string(),
                stress: rng.pick(&stress).to_string(),
                link: format!("https://example.com/gourmet/{i:03}"),
            }
        })
        .collect()
}

fn write_csv(path: &str, rows: &[RawListing]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Same rows as Parquet, with `score` stored as a nullable float column.
fn write_parquet(path: &str, rows: &[RawListing]) -> Result<()> {
    let text = |f: fn(&RawListing) -> &str| -> StringArray {
        StringArray::from(rows.iter().map(f).collect::<Vec<_>>())
    };
    let scores = Float64Array::from(
        rows.iter()
            .map(|r| r.score.parse::<f64>().ok())
            .collect::<Vec<_>>(),
    );

    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("score", DataType::Float64, true),
        Field::new("lowest_price", DataType::Utf8, false),
        Field::new("comment", DataType::Utf8, false),
        Field::new("stress", DataType::Utf8, false),
        Field::new("link", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(text(|r| r.name.as_str())),
            Arc::new(scores),
            Arc::new(text(|r| r.lowest_price.as_str())),
            Arc::new(text(|r| r.comment.as_str())),
            Arc::new(text(|r| r.stress.as_str())),
            Arc::new(text(|r| r.link.as_str())),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng, 120);

    write_csv("sample_gourmet.csv", &rows)?;
    write_parquet("sample_gourmet.parquet", &rows)?;

    println!(
        "Wrote {} listings to sample_gourmet.csv and sample_gourmet.parquet",
        rows.len()
    );
    Ok(())
}
