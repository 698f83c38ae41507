mod existing_workdir_contract;
mod launch_slurm_contract;
