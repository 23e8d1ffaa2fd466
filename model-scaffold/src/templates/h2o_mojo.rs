//! Templates for H2O MOJO models

/// Conda environment for local development
pub const ENVIRONMENT_YML: &str = r"name: prediction-service-h2o
channels:
  - defaults
  - conda-forge
dependencies:
  - python=3.8
  - openjdk=8
  - pip
  - pip:
      - -r requirements.txt
";

/// Image definition
pub const DOCKERFILE: &str = r#"FROM {{base_docker_image}}

ENV PYTHONUNBUFFERED=1
ENV DRIVERLESS_AI_LICENSE_FILE=/app/license/license.sig
WORKDIR /app

RUN apt-get update \
    && apt-get install -y --no-install-recommends openjdk-11-jre-headless \
    && rm -rf /var/lib/apt/lists/*

COPY ext_packages /app/ext_packages
COPY requirements.txt /app/requirements.txt
RUN pip install --no-cache-dir /app/ext_packages/* \
    && pip install --no-cache-dir -r /app/requirements.txt

COPY license /app/license
COPY src /app/src
COPY model /app/model

EXPOSE 8551

CMD ["python", "src/prediction_service.py"]
"#;

/// Prediction service entry point
pub const PREDICTION_SERVICE_PY: &str = r"import os

from certifai.model.sdk import SimpleModelWrapper

from utils import load_metadata, load_mojo, mojo_predict

MODEL_DIR = os.environ.get('MODEL_DIR', os.path.join(os.path.dirname(__file__), '..', 'model'))


class H2oMojoWrapper(SimpleModelWrapper):
    def __init__(self, mojo, columns, **kwargs):
        super().__init__(**kwargs)
        self.mojo = mojo
        self.columns = columns

    def predict(self, npinstances):
        return mojo_predict(self.mojo, self.columns, npinstances)


def main():
    metadata = load_metadata(MODEL_DIR)
    mojo = load_mojo(MODEL_DIR, metadata['model_file'])

    app = H2oMojoWrapper(mojo=mojo,
                         columns=metadata['columns'],
                         endpoint_url=metadata.get('endpoint_url', '/predict'))
    app.run(production=True)


if __name__ == '__main__':
    main()
";

/// MOJO loading and scoring helpers
pub const UTILS_PY: &str = r"import os

import datatable as dt
import daimojo.model
import numpy as np
import yaml


def load_metadata(model_dir):
    with open(os.path.join(model_dir, 'metadata.yml')) as f:
        return yaml.safe_load(f)


def load_mojo(model_dir, model_file):
    return daimojo.model(os.path.join(model_dir, model_file))


def mojo_predict(mojo, columns, npinstances):
    frame = dt.Frame(npinstances, names=columns)
    scores = mojo.predict(frame).to_numpy()
    labels = np.array(mojo.output_names)
    return labels[np.argmax(scores, axis=1)]
";

/// Python dependencies installed into the image
///
/// The MOJO runtime wheel itself is installed from `ext_packages/`.
pub const REQUIREMENTS_TXT: &str = r"cortex-certifai-common
cortex-certifai-model-sdk
datatable
numpy
pandas
pyyaml
";

/// Model metadata read by the prediction service
pub const METADATA_YML: &str = r"# Describe the MOJO artifact placed in this directory.
model_file: pipeline.mojo
endpoint_url: /predict
# Input column names, in the order instances are sent to the endpoint.
columns: []
";

/// Look up a template of this set by identifier
#[must_use]
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "environment.yml" => Some(ENVIRONMENT_YML),
        "Dockerfile" => Some(DOCKERFILE),
        "src/prediction_service.py" => Some(PREDICTION_SERVICE_PY),
        "src/utils.py" => Some(UTILS_PY),
        "requirements.txt" => Some(REQUIREMENTS_TXT),
        "model/metadata.yml" => Some(METADATA_YML),
        _ => None,
    }
}
