// Copyright 2016 Google Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use aabb_engine::errors::*;
use aabb_engine::math::DegenerateW;
use aabb_engine::report::{build_report, Scene};
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "aabb_report")]
struct CommandlineArguments {
    /// JSON scene with `points`, a `matrix` or `camera` and optional `settings`.
    #[structopt(parse(from_os_str))]
    scene: PathBuf,

    /// How to project boxes that reach behind the eye: 'divide' or 'full-screen'.
    #[structopt(long = "degenerate_w")]
    degenerate_w: Option<DegenerateW>,

    /// Viewport width in pixels, overriding the scene.
    #[structopt(long = "width")]
    width: Option<f64>,

    /// Viewport height in pixels, overriding the scene.
    #[structopt(long = "height")]
    height: Option<f64>,
}

fn run(args: &CommandlineArguments) -> Result<()> {
    let mut scene = Scene::from_path(&args.scene)?;
    if let Some(degenerate_w) = args.degenerate_w {
        scene.settings.degenerate_w = degenerate_w;
    }
    if let Some(width) = args.width {
        scene.settings.resolution[0] = width;
    }
    if let Some(height) = args.height {
        scene.settings.resolution[1] = height;
    }

    let report = build_report(&scene)?;
    serde_json::to_writer_pretty(io::stdout(), &report)?;
    println!();
    Ok(())
}

fn main() {
    env_logger::init();
    let args = CommandlineArguments::from_args();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
