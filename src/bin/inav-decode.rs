use anyhow::{Context, Result};
use clap::Parser;
use galileo_inav::{
    types::{InavPage, PAGE_BYTES, PAGE_PAIR_BYTES},
    FrameOutcome, InavDecoder, Svn,
};
use std::{fs, path::PathBuf};

/// Decode the I/NAV pages of an OSNMA test vector CSV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file
    input_file: PathBuf,
    /// Only decode the pages of this SVN
    #[arg(long)]
    svn: Option<u8>,
}

struct Satellite {
    svn: Svn,
    pages: Vec<(InavPage, InavPage)>,
    decoder: InavDecoder,
}

fn csv_line_to_satellite(line: &str) -> Result<Satellite> {
    let mut fields = line.split(',');
    let wrong_format = || anyhow::anyhow!("CSV has wrong format");
    let svn: u8 = fields.next().ok_or_else(wrong_format)?.trim().parse()?;
    let svn = Svn::try_from(svn).map_err(|_| anyhow::anyhow!("invalid SVN {}", svn))?;
    // skip length CSV field
    fields.next().ok_or_else(wrong_format)?;
    let data = hex::decode(fields.next().ok_or_else(wrong_format)?.trim())?;
    if data.len() % PAGE_PAIR_BYTES != 0 {
        anyhow::bail!(
            "data for {} is not a whole number of page pairs ({} bytes)",
            svn,
            data.len()
        );
    }
    let pages = data
        .chunks_exact(PAGE_PAIR_BYTES)
        .map(|pair| {
            let mut even = [0; PAGE_BYTES];
            let mut odd = [0; PAGE_BYTES];
            even.copy_from_slice(&pair[..PAGE_BYTES]);
            odd.copy_from_slice(&pair[PAGE_BYTES..]);
            (even, odd)
        })
        .collect();
    Ok(Satellite {
        svn,
        pages,
        decoder: InavDecoder::new(),
    })
}

impl Satellite {
    fn process(&mut self, page_num: usize) -> bool {
        let Some(&(even, odd)) = self.pages.get(page_num) else {
            return false;
        };
        for (page, is_odd) in [(even, false), (odd, true)] {
            let outcome = self.decoder.submit_page(&page, is_odd);
            log::trace!("{} page pair {}: {:?}", self.svn, page_num, outcome);
            if outcome.is_error() {
                log::warn!("{} page pair {}: {:?}", self.svn, page_num, outcome);
            }
            if let FrameOutcome::Accepted(_) = outcome {
                self.report();
            }
        }
        true
    }

    fn report(&mut self) {
        let gst = self.decoder.gst();
        if self.decoder.has_new_ephemeris() {
            log::info!(
                "{} new ephemeris (GST {:?}): {:?}",
                self.svn,
                gst,
                self.decoder.get_ephemeris()
            );
        }
        if self.decoder.has_new_iono() {
            log::info!(
                "{} new ionospheric correction: {:?}",
                self.svn,
                self.decoder.get_iono()
            );
        }
        if self.decoder.has_new_utc_model() {
            let utc = self.decoder.get_utc_model();
            log::info!("{} new UTC model: {:?}", self.svn, utc);
            if let Some(gst) = gst {
                log::info!(
                    "{} GST-UTC offset at {:?} = {} s",
                    self.svn,
                    gst,
                    utc.delta_t_utc(gst)
                );
            }
        }
        if self.decoder.has_new_almanac() {
            let almanac = self.decoder.get_almanac();
            for sat in almanac.iter() {
                log::info!("{} almanac for {}: {:?}", self.svn, sat.svn, sat);
            }
            if let (Some(conversion), Some(gst)) = (almanac.gst_gps, gst) {
                log::info!(
                    "{} GST-GPS offset at {:?} = {} s",
                    self.svn,
                    gst,
                    conversion.offset(gst)
                );
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let csv = fs::read_to_string(&args.input_file)
        .with_context(|| format!("could not read {}", args.input_file.display()))?;
    let mut csv = csv.lines();
    // discard csv header
    csv.next()
        .ok_or_else(|| anyhow::anyhow!("input file is empty"))?;
    let mut satellites = Vec::new();
    for line in csv.filter(|l| !l.trim().is_empty()) {
        let satellite = csv_line_to_satellite(line)?;
        if args.svn.map_or(true, |svn| u8::from(satellite.svn) == svn) {
            satellites.push(satellite);
        }
    }
    if satellites.is_empty() {
        anyhow::bail!("no satellites to decode");
    }

    // Pages are processed in the same order as they would be received,
    // interleaving the satellites
    let mut page_num = 0;
    let mut has_pages = true;
    while has_pages {
        has_pages = false;
        for satellite in satellites.iter_mut() {
            has_pages |= satellite.process(page_num);
        }
        page_num += 1;
    }
    log::info!("processed up to {} page pairs per satellite", page_num - 1);

    Ok(())
}
