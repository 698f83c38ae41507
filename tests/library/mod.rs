mod launch_api_contract;
